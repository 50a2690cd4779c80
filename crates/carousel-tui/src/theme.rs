//! Terminal color themes

use carousel_core::Color as CoreColor;
use ratatui::style::Color;

/// Runtime theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey2: Color,

    // Semantic colors
    pub card: Color,
    pub accent: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        gruvbox_dark()
    }
}

/// Gruvbox Material dark
pub fn gruvbox_dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey0: Color::Rgb(0x7c, 0x6f, 0x64),
        grey2: Color::Rgb(0xa8, 0x99, 0x84),
        card: Color::Rgb(0xa9, 0xb6, 0x65),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        warning: Color::Rgb(0xe7, 0x8a, 0x4e),
    }
}

/// Nord
/// https://www.nordtheme.com/
pub fn nord() -> Theme {
    Theme {
        bg0: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        bg1: Color::Rgb(0x3b, 0x42, 0x52), // nord1
        bg2: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        fg0: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        fg1: Color::Rgb(0xe5, 0xe9, 0xf0), // nord5
        grey0: Color::Rgb(0x4c, 0x56, 0x6a), // nord3
        grey2: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        card: Color::Rgb(0xa3, 0xbe, 0x8c),  // nord14
        accent: Color::Rgb(0x8f, 0xbc, 0xbb), // nord7
        warning: Color::Rgb(0xd0, 0x87, 0x70), // nord12
    }
}

/// Dracula
pub fn dracula() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36),
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a),
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2),
        fg1: Color::Rgb(0xe2, 0xe2, 0xdc),
        grey0: Color::Rgb(0x62, 0x72, 0xa4),
        grey2: Color::Rgb(0xbf, 0xbf, 0xbf),
        card: Color::Rgb(0x50, 0xfa, 0x7b),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
        warning: Color::Rgb(0xff, 0xb8, 0x6c),
    }
}

/// Load a theme by name, falling back to gruvbox-dark
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox_dark(),
        "nord" => nord(),
        "dracula" => dracula(),
        other => {
            tracing::warn!(theme = other, "Unknown theme, using gruvbox-dark");
            gruvbox_dark()
        }
    }
}

/// Convert a core color to a terminal color, ignoring alpha
pub fn to_terminal(color: CoreColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        assert_eq!(load_theme("no-such-theme").bg0, gruvbox_dark().bg0);
        assert_eq!(load_theme("Nord").bg0, nord().bg0);
    }

    #[test]
    fn test_to_terminal() {
        assert_eq!(
            to_terminal(CoreColor::rgba(1, 2, 3, 4)),
            Color::Rgb(1, 2, 3)
        );
    }
}
