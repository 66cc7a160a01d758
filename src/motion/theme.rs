use std::fmt;

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Explicit dark goes to light; light and system both go to dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }

    pub fn is_dark(self, prefers_dark: bool) -> bool {
        match self {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => prefers_dark,
        }
    }

    /// Class applied to the root element.
    pub fn class(self, prefers_dark: bool) -> &'static str {
        if self.is_dark(prefers_dark) {
            "dark"
        } else {
            "light"
        }
    }

    /// Root class for a page that may still be hydrating. Before mount it is
    /// always the server-rendered default, so the stored choice is applied as
    /// a change after hydration instead of being skipped by it.
    pub fn root_class(self, prefers_dark: bool, mounted: bool) -> &'static str {
        if mounted {
            self.class(prefers_dark)
        } else {
            Theme::default().class(false)
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::System.toggled(), Theme::Dark);
    }

    #[test]
    fn test_system_follows_preference() {
        assert_eq!(Theme::System.class(true), "dark");
        assert_eq!(Theme::System.class(false), "light");
        assert_eq!(Theme::Light.class(true), "light");
        assert_eq!(Theme::Dark.class(false), "dark");
    }

    #[test]
    fn test_root_class_waits_for_mount() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            for prefers_dark in [false, true] {
                assert_eq!(theme.root_class(prefers_dark, false), "light");
            }
        }
        assert_eq!(Theme::Dark.root_class(false, true), "dark");
        assert_eq!(Theme::System.root_class(true, true), "dark");
        assert_eq!(Theme::Light.root_class(true, true), "light");
    }

    #[test]
    fn test_stored_form() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            let json = serde_json::to_string(&theme).expect("theme should serialize");
            assert_eq!(json, format!("\"{theme}\""));
            let back: Theme = serde_json::from_str(&json).expect("theme should parse");
            assert_eq!(back, theme);
        }
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }
}
