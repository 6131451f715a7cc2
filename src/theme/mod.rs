//! Theme system for human-mode output.

use console::Style;

/// Visual theme for Flow CLI human-mode output.
///
/// Centralizes styles for consistent rendering.
pub struct FlowTheme {
    // Brand styles, after the site palette (teal and lime)
    pub accent: Style,
    pub ok: Style,
    pub err: Style,
    pub warn: Style,
    pub info: Style,

    // Component styles
    pub label: Style,
    pub value: Style,
    pub muted: Style,
}

impl Default for FlowTheme {
    fn default() -> Self {
        let teal = Style::new().color256(30);
        let lime = Style::new().color256(112);

        Self {
            accent: teal.clone().bold(),
            ok: lime.bold(),
            err: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            info: teal.bold(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            muted: Style::new().dim(),
        }
    }
}
