pub mod duration;
pub mod script;
pub mod style;

pub use duration::DurationBucket;
pub use script::{GenerationRequest, Scene, Script};
pub use style::Style;
