use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Unknown or missing values fall back to the default.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(raw) if raw.eq_ignore_ascii_case("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    /// Class set on the document root.
    pub fn root_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark-mode",
            ThemeMode::Light => "light-mode",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Switch to light mode",
            ThemeMode::Light => "Switch to dark mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_values_round_into_modes() {
        assert_eq!(ThemeMode::from_storage(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_storage(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_storage(Some(" Light ")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_storage(Some("sepia")), ThemeMode::Dark);
    }

    #[test]
    fn toggle_swaps_root_class() {
        let mode = ThemeMode::default();
        assert_eq!(mode.root_class(), "dark-mode");
        assert_eq!(mode.toggled().root_class(), "light-mode");
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
        let parsed: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeMode::Dark);
    }
}
