//! File encodings of a generated [`Script`].

pub mod json;
pub mod text;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Script;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnknownFormat(String),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Txt,
}

impl ExportFormat {
    pub fn parse(tag: &str) -> Result<Self, ExportError> {
        match tag.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "txt" | "text" => Ok(Self::Txt),
            _ => Err(ExportError::UnknownFormat(tag.to_string())),
        }
    }

    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Txt => "txt",
        }
    }

    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Txt => "text/plain; charset=utf-8",
        }
    }
}

pub fn render(script: &Script, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => json::render(script),
        ExportFormat::Txt => Ok(text::render(script)),
    }
}

/// Lower-cased title with every whitespace run replaced by a single `-`.
#[must_use]
pub fn slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}

#[must_use]
pub fn file_name(script: &Script, format: ExportFormat) -> String {
    format!("roteiro-{}.{}", slug(&script.title), format.extension())
}
