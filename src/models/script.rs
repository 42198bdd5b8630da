use serde::{Deserialize, Deserializer, Serialize};

use super::{DurationBucket, Style};

/// Body of `POST /api/generate`.
///
/// Fields are not validated. A missing or `null` field is read as empty text
/// and flows into the generated templates as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    #[serde(rename = "tema", deserialize_with = "nullable_text")]
    pub theme: String,

    #[serde(rename = "estilo", deserialize_with = "nullable_text")]
    pub style: String,

    #[serde(rename = "duracao", deserialize_with = "nullable_text")]
    pub duration: String,
}

impl GenerationRequest {
    pub fn new(
        theme: impl Into<String>,
        style: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            theme: theme.into(),
            style: style.into(),
            duration: duration.into(),
        }
    }

    #[must_use]
    pub fn style(&self) -> Option<Style> {
        Style::parse(&self.style)
    }

    #[must_use]
    pub fn duration_bucket(&self) -> DurationBucket {
        DurationBucket::parse(&self.duration)
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "roteiro")]
    pub synopsis: String,

    #[serde(rename = "cenas")]
    pub scenes: Vec<Scene>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based position in the script.
    #[serde(rename = "numero")]
    pub index: usize,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "duracao")]
    pub duration_label: String,

    #[serde(rename = "dialogos")]
    pub dialogue_lines: Vec<String>,

    #[serde(rename = "promptImagem")]
    pub image_prompt: String,

    #[serde(rename = "promptAnimacao")]
    pub animation_prompt: String,

    #[serde(rename = "sfx")]
    pub sound_effects: Vec<String>,

    #[serde(rename = "trilhaSonora")]
    pub soundtrack_note: String,
}
