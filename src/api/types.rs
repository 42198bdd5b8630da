use serde::{Deserialize, Serialize};

use crate::models::{DurationBucket, Style};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StyleDto {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<Style> for StyleDto {
    fn from(style: Style) -> Self {
        Self {
            value: style.as_str(),
            label: style.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DurationDto {
    pub value: &'static str,
    pub label: &'static str,
    pub scenes: usize,
    pub scene_duration: &'static str,
}

impl From<DurationBucket> for DurationDto {
    fn from(duration: DurationBucket) -> Self {
        Self {
            value: duration.as_str(),
            label: duration.label(),
            scenes: duration.scene_count(),
            scene_duration: duration.scene_duration(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub metrics_enabled: bool,
    pub styles: Vec<StyleDto>,
    pub fallback_style: &'static str,
    pub durations: Vec<DurationDto>,
}
