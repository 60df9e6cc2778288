//! Color themes for the terminal UI.

use ratatui::style::Color;

use taskdeck_core::{Flag, FlagStore};

/// Parsed color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub done: Color,
    pub error: Color,
    pub selection_bg: Color,
    pub input_border: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Black,
            text_bright: Color::Rgb(0x10, 0x10, 0x10),
            dim: Color::DarkGray,
            accent: Color::Blue,
            done: Color::DarkGray,
            error: Color::Red,
            selection_bg: Color::Rgb(0xD8, 0xE4, 0xF8),
            input_border: Color::Blue,
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::White,
            dim: Color::Rgb(0x70, 0x70, 0x88),
            accent: Color::Rgb(0x44, 0x88, 0xFF),
            done: Color::Rgb(0x60, 0x60, 0x70),
            error: Color::Rgb(0xFF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x28, 0x28, 0x40),
            input_border: Color::Rgb(0x44, 0x88, 0xFF),
        }
    }

    /// Theme selected by the DARK_MODE feature flag.
    pub fn from_flags(flags: &FlagStore) -> Self {
        if flags.is_enabled(Flag::DarkMode) {
            Theme::dark()
        } else {
            Theme::light()
        }
    }
}
