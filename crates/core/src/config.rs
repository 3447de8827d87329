//! Shell configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_SHELL_WIDTH` | 24 | Surface width passed to `start` |
//! | `TETRIS_SHELL_HEIGHT` | 22 | Surface height passed to `start` |
//! | `TETRIS_SHELL_COLOR_SCHEME` | unset | Color scheme name |
//! | `TETRIS_SHELL_SCALING` | false | Start with scaling enabled (`1`/`true`) |
//! | `TETRIS_SHELL_HIGH_RESOLUTION` | false | Start with high density enabled (`1`/`true`) |
//! | `TETRIS_SHELL_DENSITY` | unset | Density ratio reported by the host |
//! | `TETRIS_SHELL_LOG_PATH` | unset | Log file; logging is off when unset |
//!
//! Unparseable values fall back to the default.

use crate::types::GameConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub width: u32,
    pub height: u32,
    pub color_scheme: Option<String>,
    pub scaling: bool,
    pub high_resolution: bool,
    pub density_ratio: Option<f64>,
    pub log_path: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            width: 24,
            height: 22,
            color_scheme: None,
            scaling: false,
            high_resolution: false,
            density_ratio: None,
            log_path: None,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let flag = |key: &str| {
            non_empty(key)
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false)
        };

        Self {
            width: non_empty("TETRIS_SHELL_WIDTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.width),
            height: non_empty("TETRIS_SHELL_HEIGHT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.height),
            color_scheme: non_empty("TETRIS_SHELL_COLOR_SCHEME"),
            scaling: flag("TETRIS_SHELL_SCALING"),
            high_resolution: flag("TETRIS_SHELL_HIGH_RESOLUTION"),
            density_ratio: non_empty("TETRIS_SHELL_DENSITY").and_then(|s| s.parse().ok()),
            log_path: non_empty("TETRIS_SHELL_LOG_PATH"),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            color_scheme: self.color_scheme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(ShellConfig::from_lookup(|_| None), ShellConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let cfg = ShellConfig::from_lookup(lookup(&[
            ("TETRIS_SHELL_WIDTH", "30"),
            ("TETRIS_SHELL_HEIGHT", " 12 "),
            ("TETRIS_SHELL_COLOR_SCHEME", "grayscale"),
            ("TETRIS_SHELL_SCALING", "TRUE"),
            ("TETRIS_SHELL_HIGH_RESOLUTION", "1"),
            ("TETRIS_SHELL_DENSITY", "2.5"),
            ("TETRIS_SHELL_LOG_PATH", "/tmp/shell.log"),
        ]));
        assert_eq!(cfg.width, 30);
        assert_eq!(cfg.height, 12);
        assert!(cfg.scaling && cfg.high_resolution);
        assert_eq!(cfg.density_ratio, Some(2.5));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/shell.log"));
        assert_eq!(
            cfg.game_config(),
            GameConfig::new(30, 12).with_color_scheme("grayscale")
        );
    }

    #[test]
    fn garbage_values_fall_back() {
        let cfg = ShellConfig::from_lookup(lookup(&[
            ("TETRIS_SHELL_WIDTH", "wide"),
            ("TETRIS_SHELL_SCALING", "yes"),
            ("TETRIS_SHELL_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.width, 24);
        assert!(!cfg.scaling);
        assert_eq!(cfg.log_path, None);
    }
}
