//! Literal template content keyed by [`Style`].
//!
//! Every style owns one [`StyleTemplates`] entry. Scene flavour fields are
//! optional: a style without its own phrasing, or a tag that does not parse
//! to a style at all, uses the generic text below.

use crate::models::Style;

/// Placeholder replaced by the theme in synopsis templates.
pub const THEME_SLOT: &str = "{tema}";

pub const GENERIC_OPENING_SCORE: &str = "Música atmosférica e envolvente";
pub const GENERIC_DEVELOPMENT_MOTION: &str = "smooth transitions, layered depth";
pub const GENERIC_CLIMAX_REVEAL: &str = "emotional crescendo";
pub const GENERIC_COMPANION_LINE: &str = "Vamos em frente!";

#[derive(Debug)]
pub struct StyleTemplates {
    pub title_prefixes: [&'static str; 4],

    /// Contains [`THEME_SLOT`] exactly once.
    pub synopsis: &'static str,

    pub opening_score: Option<&'static str>,

    pub development_motion: Option<&'static str>,

    pub climax_reveal: Option<&'static str>,

    /// Second line spoken on even development scenes.
    pub companion_line: Option<&'static str>,
}

static TERROR: StyleTemplates = StyleTemplates {
    title_prefixes: ["O Segredo de", "A Maldição de", "O Mistério de", "Sombras em"],
    synopsis: "Uma história assustadora sobre {tema}. Prepare-se para momentos de tensão e sustos que vão prender sua atenção do início ao fim. Elementos sobrenaturais e atmosfera sombria criam uma experiência aterrorizante.",
    opening_score: Some("Música tensa e misteriosa"),
    development_motion: None,
    climax_reveal: Some("shocking twist visual"),
    companion_line: Some("Você ouviu isso?"),
};

static MISTERIO: StyleTemplates = StyleTemplates {
    title_prefixes: ["O Enigma de", "O Caso", "Investigando", "Os Segredos de"],
    synopsis: "Um intrigante mistério envolvendo {tema}. Pistas são reveladas gradualmente, levando a uma conclusão surpreendente que vai desafiar suas expectativas.",
    opening_score: None,
    development_motion: None,
    climax_reveal: None,
    companion_line: None,
};

static FICCAO: StyleTemplates = StyleTemplates {
    title_prefixes: ["Além de", "Viagem para", "A Dimensão de", "Futuro"],
    synopsis: "Uma aventura de ficção científica explorando {tema}. Tecnologia avançada, conceitos futuristas e dilemas éticos se entrelaçam nesta narrativa épica.",
    opening_score: None,
    development_motion: None,
    climax_reveal: None,
    companion_line: None,
};

static DRAMA: StyleTemplates = StyleTemplates {
    title_prefixes: ["A História de", "Memórias de", "O Dilema de", "Entre"],
    synopsis: "Um drama emocionante sobre {tema}. Personagens profundos enfrentam desafios pessoais e decisões difíceis que mudarão suas vidas para sempre.",
    opening_score: None,
    development_motion: None,
    climax_reveal: None,
    companion_line: None,
};

static COMEDIA: StyleTemplates = StyleTemplates {
    title_prefixes: ["As Aventuras de", "Confusões em", "O Dia Que", "Risadas em"],
    synopsis: "Uma comédia divertida sobre {tema}. Situações hilárias e diálogos espirituosos garantem risadas do início ao fim.",
    opening_score: Some("Música alegre e animada"),
    development_motion: None,
    climax_reveal: None,
    companion_line: None,
};

static ACAO: StyleTemplates = StyleTemplates {
    title_prefixes: ["A Missão", "Caçada em", "Fuga de", "Batalha em"],
    synopsis: "Uma ação explosiva envolvendo {tema}. Cenas de tirar o fôlego, adrenalina pura e uma narrativa dinâmica mantêm você na ponta da cadeira.",
    opening_score: None,
    development_motion: Some("fast-paced action, intense motion blur"),
    climax_reveal: None,
    companion_line: None,
};

static MOTIVACIONAL: StyleTemplates = StyleTemplates {
    title_prefixes: ["Superando", "A Jornada de", "Transformação", "O Poder de"],
    synopsis: "Uma história inspiradora sobre {tema}. Superação, determinação e transformação pessoal mostram que é possível alcançar o impossível.",
    opening_score: None,
    development_motion: None,
    climax_reveal: None,
    companion_line: None,
};

static EDUCATIVO: StyleTemplates = StyleTemplates {
    title_prefixes: ["Entendendo", "A Ciência de", "Como Funciona", "Descobrindo"],
    synopsis: "Um conteúdo educativo sobre {tema}. Informações valiosas apresentadas de forma clara e envolvente para facilitar o aprendizado.",
    opening_score: None,
    development_motion: None,
    climax_reveal: None,
    companion_line: None,
};

#[must_use]
pub fn for_style(style: Style) -> &'static StyleTemplates {
    match style {
        Style::Terror => &TERROR,
        Style::Misterio => &MISTERIO,
        Style::Ficcao => &FICCAO,
        Style::Drama => &DRAMA,
        Style::Comedia => &COMEDIA,
        Style::Acao => &ACAO,
        Style::Motivacional => &MOTIVACIONAL,
        Style::Educativo => &EDUCATIVO,
    }
}

/// Templates for a raw tag, using the fallback style when it is unknown.
#[must_use]
pub fn for_tag(tag: &str) -> &'static StyleTemplates {
    for_style(Style::resolve(tag))
}
