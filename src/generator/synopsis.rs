use super::templates::{self, THEME_SLOT};

#[must_use]
pub fn generate_synopsis(theme: &str, style_tag: &str) -> String {
    templates::for_tag(style_tag)
        .synopsis
        .replacen(THEME_SLOT, theme, 1)
}
