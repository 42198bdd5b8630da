//! Per-scene template expansion.
//!
//! Content depends only on the scene position, the theme, the raw style tag
//! and the duration bucket. There is no randomness here.

use super::templates::{
    self, GENERIC_CLIMAX_REVEAL, GENERIC_COMPANION_LINE, GENERIC_DEVELOPMENT_MOTION,
    GENERIC_OPENING_SCORE, StyleTemplates,
};
use crate::models::{DurationBucket, Scene, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneBranch {
    Opening,
    Development,
    Climax,
}

impl SceneBranch {
    /// Opening covers `index <= ceil(total * 0.25)`, climax `index >= ceil(total * 0.75)`.
    /// When both hold, opening wins.
    #[must_use]
    pub const fn classify(index: usize, total: usize) -> Self {
        let opening_end = total.div_ceil(4);
        let climax_start = (total * 3).div_ceil(4);

        if index <= opening_end {
            Self::Opening
        } else if index < climax_start {
            Self::Development
        } else {
            Self::Climax
        }
    }
}

/// Builds scene `index` (1-based) of a script with `total` scenes.
#[must_use]
pub fn generate_scene(
    index: usize,
    theme: &str,
    style_tag: &str,
    duration: DurationBucket,
    total: usize,
) -> Scene {
    let flavour = Style::parse(style_tag).map(templates::for_style);
    let duration_label = duration.scene_duration().to_string();

    match SceneBranch::classify(index, total) {
        SceneBranch::Opening => Scene {
            index,
            description: format!(
                "Estabelecimento da cena. Apresentação do ambiente e contexto relacionado a {theme}. O mood é definido para capturar a atenção do espectador imediatamente."
            ),
            duration_label,
            dialogue_lines: Vec::new(),
            image_prompt: format!(
                "cinematic establishing shot of {theme}, {style_tag} atmosphere, dramatic lighting, high quality, detailed environment, photorealistic, 8k resolution"
            ),
            animation_prompt:
                "slow camera push in, subtle atmospheric movement, particles floating in air, cinematic reveal"
                    .to_string(),
            sound_effects: tags(&["ambiente", "transição suave", "atmosfera inicial"]),
            soundtrack_note: format!(
                "{} com build-up gradual",
                pick(flavour, |t| t.opening_score, GENERIC_OPENING_SCORE)
            ),
        },
        SceneBranch::Development => Scene {
            index,
            description: format!(
                "Desenvolvimento da narrativa sobre {theme}. Elementos centrais da história são explorados com maior profundidade e tensão crescente."
            ),
            duration_label,
            dialogue_lines: development_dialogue(index, flavour),
            image_prompt: format!(
                "detailed scene showing {theme}, {style_tag} mood, dynamic composition, rich colors, emotional lighting, cinematic framing, ultra detailed"
            ),
            animation_prompt: format!(
                "dynamic camera movement, {}, professional video effects",
                pick(flavour, |t| t.development_motion, GENERIC_DEVELOPMENT_MOTION)
            ),
            sound_effects: tags(&["movimento", "ação", "intensificação", "impacto sonoro"]),
            soundtrack_note:
                "Música principal intensifica, ritmo aumenta, elementos melódicos mais presentes"
                    .to_string(),
        },
        SceneBranch::Climax => Scene {
            index,
            description: format!(
                "Clímax e resolução da história sobre {theme}. A narrativa atinge seu ponto alto com revelações impactantes e conclusão satisfatória."
            ),
            duration_label,
            dialogue_lines: climax_dialogue(index, total),
            image_prompt: format!(
                "epic finale scene for {theme}, {style_tag} climax, dramatic contrast, powerful composition, cinematic masterpiece, award-winning photography, 8k"
            ),
            animation_prompt: format!(
                "dramatic camera reveal, {}, slow motion elements, final impact shot",
                pick(flavour, |t| t.climax_reveal, GENERIC_CLIMAX_REVEAL)
            ),
            sound_effects: tags(&["clímax sonoro", "impacto final", "resolução", "fade out"]),
            soundtrack_note: "Música atinge o clímax, resolução harmônica, fade out emocional"
                .to_string(),
        },
    }
}

fn pick(
    flavour: Option<&'static StyleTemplates>,
    field: impl Fn(&StyleTemplates) -> Option<&'static str>,
    generic: &'static str,
) -> &'static str {
    flavour.and_then(field).unwrap_or(generic)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn quoted(line: &str) -> String {
    format!("\"{line}\"")
}

fn development_dialogue(index: usize, flavour: Option<&'static StyleTemplates>) -> Vec<String> {
    let opener = match index {
        2 => "Algo não está certo aqui...",
        3 => "Precisamos descobrir a verdade.",
        _ => "Este é o momento decisivo.",
    };

    // Even scenes add a reply inside the same entry, one line per speaker.
    let mut exchange = quoted(opener);
    if index % 2 == 0 {
        exchange.push('\n');
        exchange.push_str(&quoted(pick(
            flavour,
            |t| t.companion_line,
            GENERIC_COMPANION_LINE,
        )));
    }

    non_blank(vec![exchange])
}

fn climax_dialogue(index: usize, total: usize) -> Vec<String> {
    let line = if index == total {
        "Finalmente entendemos tudo."
    } else {
        "Este é apenas o começo..."
    };

    non_blank(vec![quoted(line)])
}

fn non_blank(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_short() {
        assert_eq!(SceneBranch::classify(1, 3), SceneBranch::Opening);
        assert_eq!(SceneBranch::classify(2, 3), SceneBranch::Development);
        assert_eq!(SceneBranch::classify(3, 3), SceneBranch::Climax);
    }

    #[test]
    fn test_classify_medium() {
        let branches: Vec<_> = (1..=5).map(|i| SceneBranch::classify(i, 5)).collect();
        assert_eq!(
            branches,
            vec![
                SceneBranch::Opening,
                SceneBranch::Opening,
                SceneBranch::Development,
                SceneBranch::Climax,
                SceneBranch::Climax,
            ]
        );
    }

    #[test]
    fn test_classify_long() {
        assert_eq!(SceneBranch::classify(2, 8), SceneBranch::Opening);
        for i in 3..=5 {
            assert_eq!(SceneBranch::classify(i, 8), SceneBranch::Development);
        }
        assert_eq!(SceneBranch::classify(6, 8), SceneBranch::Climax);
        assert_eq!(SceneBranch::classify(8, 8), SceneBranch::Climax);
    }

    #[test]
    fn test_classify_tiny_counts_prefer_opening() {
        assert_eq!(SceneBranch::classify(1, 1), SceneBranch::Opening);
        assert_eq!(SceneBranch::classify(1, 2), SceneBranch::Opening);
        assert_eq!(SceneBranch::classify(2, 2), SceneBranch::Climax);
    }

    #[test]
    fn test_opening_scene() {
        let scene = generate_scene(1, "a haunted lighthouse", "terror", DurationBucket::Curto, 3);

        assert_eq!(scene.index, 1);
        assert_eq!(scene.duration_label, "15-20s");
        assert!(scene.dialogue_lines.is_empty());
        assert!(
            scene
                .image_prompt
                .starts_with("cinematic establishing shot of a haunted lighthouse, terror atmosphere")
        );
        assert_eq!(
            scene.soundtrack_note,
            "Música tensa e misteriosa com build-up gradual"
        );
        assert_eq!(scene.sound_effects.len(), 3);
    }

    #[test]
    fn test_opening_scores_by_style() {
        let comedy = generate_scene(1, "x", "comedia", DurationBucket::Curto, 3);
        assert_eq!(comedy.soundtrack_note, "Música alegre e animada com build-up gradual");

        let drama = generate_scene(1, "x", "drama", DurationBucket::Curto, 3);
        assert_eq!(
            drama.soundtrack_note,
            "Música atmosférica e envolvente com build-up gradual"
        );
    }

    #[test]
    fn test_development_dialogue_by_index() {
        let second = generate_scene(2, "x", "terror", DurationBucket::Curto, 3);
        assert_eq!(
            second.dialogue_lines,
            vec!["\"Algo não está certo aqui...\"\n\"Você ouviu isso?\""]
        );

        let third = generate_scene(3, "x", "drama", DurationBucket::Longo, 8);
        assert_eq!(third.dialogue_lines, vec!["\"Precisamos descobrir a verdade.\""]);

        let fourth = generate_scene(4, "x", "drama", DurationBucket::Longo, 8);
        assert_eq!(
            fourth.dialogue_lines,
            vec!["\"Este é o momento decisivo.\"\n\"Vamos em frente!\""]
        );

        let fifth = generate_scene(5, "x", "terror", DurationBucket::Longo, 8);
        assert_eq!(fifth.dialogue_lines, vec!["\"Este é o momento decisivo.\""]);
    }

    #[test]
    fn test_development_motion_for_action() {
        let action = generate_scene(3, "x", "acao", DurationBucket::Longo, 8);
        assert_eq!(
            action.animation_prompt,
            "dynamic camera movement, fast-paced action, intense motion blur, professional video effects"
        );

        let other = generate_scene(3, "x", "educativo", DurationBucket::Longo, 8);
        assert_eq!(
            other.animation_prompt,
            "dynamic camera movement, smooth transitions, layered depth, professional video effects"
        );
    }

    #[test]
    fn test_climax_scene() {
        let last = generate_scene(3, "a haunted lighthouse", "terror", DurationBucket::Curto, 3);
        assert!(last.image_prompt.starts_with("epic finale scene for a haunted lighthouse"));
        assert!(last.animation_prompt.contains("shocking twist visual"));
        assert_eq!(last.dialogue_lines, vec!["\"Finalmente entendemos tudo.\""]);

        let earlier = generate_scene(6, "x", "drama", DurationBucket::Longo, 8);
        assert!(earlier.animation_prompt.contains("emotional crescendo"));
        assert_eq!(earlier.dialogue_lines, vec!["\"Este é apenas o começo...\""]);
    }

    #[test]
    fn test_unknown_style_uses_generic_flavour() {
        let opening = generate_scene(1, "x", "unknown-tag", DurationBucket::Curto, 3);
        assert!(opening.image_prompt.contains("unknown-tag atmosphere"));
        assert_eq!(
            opening.soundtrack_note,
            "Música atmosférica e envolvente com build-up gradual"
        );

        let development = generate_scene(2, "x", "unknown-tag", DurationBucket::Curto, 3);
        assert_eq!(development.dialogue_lines.len(), 1);
        assert!(development.dialogue_lines[0].ends_with("\n\"Vamos em frente!\""));

        let climax = generate_scene(3, "x", "unknown-tag", DurationBucket::Curto, 3);
        assert!(climax.animation_prompt.contains("emotional crescendo"));
    }
}
