use clap::ValueEnum;
use crossterm::style::Color;

/// Selectable theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeName {
    pub fn next(&self) -> ThemeName {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::HighContrast,
            ThemeName::HighContrast => ThemeName::Dark,
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Board frame color
    pub border: Color,
    /// Background of white squares
    pub light_square: Color,
    /// Background of black squares
    pub dark_square: Color,
    /// Queen glyph color
    pub queen: Color,
    /// Marker for squares still free to take a queen
    pub free: Color,
    /// Cursor square background
    pub cursor_bg: Color,
    /// Success/solved color
    pub success: Color,
    /// Error/no-solution color
    pub error: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            light_square: Color::Rgb { r: 70, g: 75, b: 90 },
            dark_square: Color::Rgb { r: 35, g: 40, b: 55 },
            queen: Color::Rgb { r: 255, g: 90, b: 90 },
            free: Color::Rgb { r: 140, g: 150, b: 180 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 60, g: 60, b: 80 },
            light_square: Color::Rgb { r: 240, g: 217, b: 181 },
            dark_square: Color::Rgb { r: 181, g: 136, b: 99 },
            queen: Color::Rgb { r: 200, g: 20, b: 20 },
            free: Color::Rgb { r: 90, g: 90, b: 110 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: ThemeName::HighContrast,
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            light_square: Color::Grey,
            dark_square: Color::Black,
            queen: Color::Red,
            free: Color::Yellow,
            cursor_bg: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
