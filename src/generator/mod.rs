//! Template-driven script generation.
//!
//! [`ScriptGenerator::generate_with`] is the whole pipeline: scene count from
//! the duration bucket, a title from a random style prefix, a style-keyed
//! synopsis, and one scene per position. Only the title prefix is random and
//! the random source is passed in by the caller.

pub mod scene;
pub mod synopsis;
pub mod templates;
pub mod title;

pub use scene::{SceneBranch, generate_scene};
pub use synopsis::generate_synopsis;
pub use title::{DEFAULT_TITLE_THEME_CHARS, generate_title};

use rand::Rng;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::models::{GenerationRequest, Script};

#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    title_theme_chars: usize,
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self {
            title_theme_chars: DEFAULT_TITLE_THEME_CHARS,
        }
    }
}

impl ScriptGenerator {
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            title_theme_chars: config.title_theme_chars,
        }
    }

    /// Generates a script using the thread-local random generator.
    #[must_use]
    pub fn generate(&self, request: &GenerationRequest) -> Script {
        self.generate_with(request, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Script {
        let duration = request.duration_bucket();
        let total = duration.scene_count();

        debug!(
            estilo = %request.style,
            duracao = %duration,
            scenes = total,
            "Generating script"
        );

        let scenes = (1..=total)
            .map(|index| generate_scene(index, &request.theme, &request.style, duration, total))
            .collect();

        Script {
            title: generate_title(&request.theme, &request.style, self.title_theme_chars, rng),
            synopsis: generate_synopsis(&request.theme, &request.style),
            scenes,
        }
    }
}
