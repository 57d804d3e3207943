//! Color theme.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Saved preference if valid, otherwise the system preference.
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        saved.and_then(Self::parse).unwrap_or(if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }
}
