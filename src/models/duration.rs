use serde::{Deserialize, Serialize};

/// Target length of the video. Controls scene count and the per-scene label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    Curto,
    Medio,
    Longo,
}

impl DurationBucket {
    pub const ALL: [Self; 3] = [Self::Curto, Self::Medio, Self::Longo];

    /// Any tag other than `curto` or `medio` is treated as `longo`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "curto" => Self::Curto,
            "medio" => Self::Medio,
            _ => Self::Longo,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Curto => "curto",
            Self::Medio => "medio",
            Self::Longo => "longo",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Curto => "Curto (30-60s)",
            Self::Medio => "Médio (3-5min)",
            Self::Longo => "Longo (8-15min)",
        }
    }

    #[must_use]
    pub const fn scene_count(&self) -> usize {
        match self {
            Self::Curto => 3,
            Self::Medio => 5,
            Self::Longo => 8,
        }
    }

    #[must_use]
    pub const fn scene_duration(&self) -> &'static str {
        match self {
            Self::Curto => "15-20s",
            Self::Medio => "30-60s",
            Self::Longo => "60-120s",
        }
    }
}

impl std::fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
