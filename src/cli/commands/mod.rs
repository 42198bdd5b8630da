mod generate;
mod styles;

pub use generate::{GenerateArgs, cmd_generate};
pub use styles::cmd_styles;
