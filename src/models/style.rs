use serde::{Deserialize, Serialize};

/// Genre used to pick template content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Terror,
    Misterio,
    Ficcao,
    Drama,
    Comedia,
    Acao,
    Motivacional,
    Educativo,
}

impl Style {
    pub const ALL: [Self; 8] = [
        Self::Terror,
        Self::Misterio,
        Self::Ficcao,
        Self::Drama,
        Self::Comedia,
        Self::Acao,
        Self::Motivacional,
        Self::Educativo,
    ];

    /// Used for titles and synopses whenever the requested tag is not recognised.
    pub const FALLBACK: Self = Self::Misterio;

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Terror => "terror",
            Self::Misterio => "misterio",
            Self::Ficcao => "ficcao",
            Self::Drama => "drama",
            Self::Comedia => "comedia",
            Self::Acao => "acao",
            Self::Motivacional => "motivacional",
            Self::Educativo => "educativo",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Terror => "Terror/Horror",
            Self::Misterio => "Mistério",
            Self::Ficcao => "Ficção Científica",
            Self::Drama => "Drama",
            Self::Comedia => "Comédia",
            Self::Acao => "Ação/Aventura",
            Self::Motivacional => "Motivacional",
            Self::Educativo => "Educativo",
        }
    }

    /// Exact, case-sensitive tag lookup.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == tag)
    }

    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Self::FALLBACK)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
