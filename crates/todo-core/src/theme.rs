//! Light/Dark Theme

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on `<body>` while this theme is active
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    /// Material Symbols icon for the toggle button, naming the theme a
    /// click switches to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "dark_mode",
            Theme::Dark => "light_mode",
        }
    }
}
