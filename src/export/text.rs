use std::fmt::Write;

use crate::models::Script;

const SCENE_RULE_WIDTH: usize = 50;

/// Flattened, human-readable transcript of a script.
#[must_use]
pub fn render(script: &Script) -> String {
    let mut out = String::new();

    // The rule is as long as the title in UTF-16 units.
    let _ = write!(
        out,
        "{}\n{}\n\n{}\n\n",
        script.title,
        "=".repeat(script.title.encode_utf16().count()),
        script.synopsis
    );

    for scene in &script.scenes {
        let _ = write!(
            out,
            "\nCENA {} - {}\n{}\n",
            scene.index,
            scene.duration_label,
            "-".repeat(SCENE_RULE_WIDTH)
        );
        let _ = write!(out, "{}\n\n", scene.description);

        if !scene.dialogue_lines.is_empty() {
            let _ = write!(out, "Diálogos:\n{}\n\n", scene.dialogue_lines.join("\n"));
        }

        let _ = write!(out, "🎨 Prompt Imagem: {}\n\n", scene.image_prompt);
        let _ = write!(out, "🎬 Prompt Animação: {}\n\n", scene.animation_prompt);
        let _ = write!(out, "🔊 SFX: {}\n\n", scene.sound_effects.join(", "));
        let _ = write!(out, "🎵 Trilha: {}\n\n", scene.soundtrack_note);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scene;

    fn scene(index: usize, dialogue: Vec<&str>) -> Scene {
        Scene {
            index,
            description: format!("Descrição {index}"),
            duration_label: "15-20s".to_string(),
            dialogue_lines: dialogue.into_iter().map(String::from).collect(),
            image_prompt: "img".to_string(),
            animation_prompt: "anim".to_string(),
            sound_effects: vec!["ambiente".to_string(), "fade out".to_string()],
            soundtrack_note: "trilha".to_string(),
        }
    }

    #[test]
    fn test_text_layout() {
        let script = Script {
            title: "Caçada em Farol".to_string(),
            synopsis: "Sinopse.".to_string(),
            scenes: vec![scene(1, vec![]), scene(2, vec!["\"Oi\"", "\"Tchau\""])],
        };

        let expected = format!(
            "Caçada em Farol\n{}\n\nSinopse.\n\n\
             \nCENA 1 - 15-20s\n{dashes}\nDescrição 1\n\n\
             🎨 Prompt Imagem: img\n\n🎬 Prompt Animação: anim\n\n🔊 SFX: ambiente, fade out\n\n🎵 Trilha: trilha\n\n\
             \nCENA 2 - 15-20s\n{dashes}\nDescrição 2\n\n\
             Diálogos:\n\"Oi\"\n\"Tchau\"\n\n\
             🎨 Prompt Imagem: img\n\n🎬 Prompt Animação: anim\n\n🔊 SFX: ambiente, fade out\n\n🎵 Trilha: trilha\n\n",
            "=".repeat(15),
            dashes = "-".repeat(50),
        );

        assert_eq!(render(&script), expected);
    }

    #[test]
    fn test_title_rule_counts_characters() {
        let script = Script {
            title: "Ação".to_string(),
            synopsis: String::new(),
            scenes: vec![],
        };

        assert!(render(&script).starts_with("Ação\n====\n\n"));
    }

    #[test]
    fn test_title_rule_counts_surrogate_pairs() {
        let script = Script {
            title: "Farol 🎬".to_string(),
            synopsis: String::new(),
            scenes: vec![],
        };

        let expected = format!("Farol 🎬\n{}\n\n", "=".repeat(8));
        assert!(render(&script).starts_with(&expected));
    }
}
