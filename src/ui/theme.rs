//! Visual theme and styling.

use console::Style;

/// Doclint's visual theme.
#[derive(Debug, Clone)]
pub struct DoclintTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for section headers (bold).
    pub header: Style,
    /// Style for dim/secondary text (progress lines).
    pub dim: Style,
}

impl Default for DoclintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoclintTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }
}

/// Whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_new() {
        // Styles have no PartialEq; compare through rendered output.
        let themed = DoclintTheme::new().success.force_styling(true).apply_to("x");
        let defaulted = DoclintTheme::default()
            .success
            .force_styling(true)
            .apply_to("x");
        assert_eq!(themed.to_string(), defaulted.to_string());
    }

    #[test]
    fn plain_theme_does_not_style() {
        let theme = DoclintTheme::plain();
        assert_eq!(theme.error.apply_to("boom").to_string(), "boom");
    }
}
