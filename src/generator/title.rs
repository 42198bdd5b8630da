use rand::Rng;

use super::templates;

/// Theme characters kept in a title when no limit is configured.
pub const DEFAULT_TITLE_THEME_CHARS: usize = 30;

/// Joins a randomly drawn style prefix with the truncated, trimmed theme.
pub fn generate_title<R: Rng + ?Sized>(
    theme: &str,
    style_tag: &str,
    max_theme_chars: usize,
    rng: &mut R,
) -> String {
    let prefixes = &templates::for_tag(style_tag).title_prefixes;
    let prefix = prefixes[rng.random_range(0..prefixes.len())];

    let truncated: String = theme.chars().take(max_theme_chars).collect();

    format!("{} {}", prefix, truncated.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Style;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_title_uses_style_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let title = generate_title("a haunted lighthouse", "terror", 30, &mut rng);

        let prefixes = templates::for_style(Style::Terror).title_prefixes;
        assert!(prefixes.iter().any(|p| title.starts_with(p)), "{title}");
        assert!(title.ends_with(" a haunted lighthouse"));
    }

    #[test]
    fn test_theme_is_truncated_then_trimmed() {
        let mut rng = StdRng::seed_from_u64(1);
        let theme = "uma casa muito antiga e       assombrada no fim da rua";
        let title = generate_title(theme, "drama", 30, &mut rng);

        assert!(title.ends_with(" uma casa muito antiga e"), "{title}");
    }

    #[test]
    fn test_truncation_counts_characters() {
        let mut rng = StdRng::seed_from_u64(3);
        let title = generate_title("ação ação ação", "acao", 4, &mut rng);
        assert!(title.ends_with(" ação"), "{title}");
    }

    #[test]
    fn test_unknown_style_uses_mystery_prefixes() {
        let mut rng = StdRng::seed_from_u64(11);
        let title = generate_title("farol", "unknown-tag", 30, &mut rng);

        let prefixes = templates::for_style(Style::Misterio).title_prefixes;
        assert!(prefixes.iter().any(|p| title.starts_with(p)), "{title}");
    }

    #[test]
    fn test_same_seed_same_title() {
        let a = generate_title("farol", "ficcao", 30, &mut StdRng::seed_from_u64(42));
        let b = generate_title("farol", "ficcao", 30, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_prefix_is_reachable() {
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: HashSet<String> = (0..200)
            .map(|_| generate_title("", "comedia", 30, &mut rng))
            .collect();

        assert_eq!(seen.len(), 4);
    }
}
