use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Unknown names fall back to the dark theme.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                text: Color::White,
                muted: Color::Gray,
                accent: Color::LightCyan,
                positive: Color::Green,
                negative: Color::Red,
                warning: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
            },
            Theme::Light => Palette {
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                positive: Color::Green,
                negative: Color::Red,
                warning: Color::Magenta,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
            },
        }
    }
}
