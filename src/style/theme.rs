use std::path::Path;

use anyhow::{Context, bail};
use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Colours and sizes handed to widgets at construction.
///
/// Missing fields fall back to the defaults, so a theme file only needs to
/// name what it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub text_size: f32,
    pub foreground: [f32; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_size: 14.0,
            foreground: [0.13, 0.13, 0.13, 1.0],
        }
    }
}

impl Theme {
    pub fn em(&self) -> f32 {
        self.text_size
    }

    pub fn foreground_color(&self) -> Vec4 {
        Vec4::from(self.foreground)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("invalid YAML theme")
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid JSON theme")
    }

    /// Reads a theme file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme {}", path.display()))?;

        let theme = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&src),
            Some("json") => Self::from_json_str(&src),
            other => bail!("unsupported theme format {other:?} for {}", path.display()),
        }
        .with_context(|| format!("failed to load theme {}", path.display()))?;

        log::info!("loaded theme from {}", path.display());
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let t = Theme::default();
        assert_eq!(t.em(), 14.0);
        assert_eq!(t.foreground_color().w, 1.0);
    }

    #[test]
    fn test_theme_partial_yaml() {
        let t = Theme::from_yaml_str("text_size: 16\nforeground: [1.0, 0.0, 0.0, 1.0]\n").unwrap();
        assert_eq!(t.text_size, 16.0);
        assert_eq!(t.foreground, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Theme::from_yaml_str("{}").unwrap(), Theme::default());
    }

    #[test]
    fn test_theme_json() {
        let t = Theme::from_json_str(r#"{"foreground": [0.0, 1.0, 0.0, 0.5]}"#).unwrap();
        assert_eq!(t.foreground_color(), Vec4::new(0.0, 1.0, 0.0, 0.5));
        assert_eq!(t.text_size, 14.0);
    }

    #[test]
    fn test_theme_invalid_input() {
        assert!(Theme::from_json_str("{\"text_size\": \"big\"}").is_err());
        assert!(Theme::from_yaml_str("text_size: [").is_err());
    }

    #[test]
    fn test_theme_load_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("padbox-theme-{}.yaml", std::process::id()));
        std::fs::write(&path, "text_size: 12\n").unwrap();
        let t = Theme::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(t.em(), 12.0);
    }

    #[test]
    fn test_theme_load_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("padbox-theme-{}.toml", std::process::id()));
        std::fs::write(&path, "text_size = 12\n").unwrap();
        let err = Theme::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("unsupported theme format"));
    }

    #[test]
    fn test_theme_load_missing_file() {
        let err = Theme::load("/nonexistent/padbox/theme.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read theme"));
    }
}
