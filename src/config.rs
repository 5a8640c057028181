//! YAML configuration for the `tap_chess` binary.
//!
//! Every field has a default, so a missing file (or a file that sets only a
//! few keys) is fine. Unknown keys are rejected.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::utils::render_board::RenderOptions;

pub const CONFIG_PATH_ENV: &str = "TAP_CHESS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub show_coordinates: bool,
    pub highlight: char,
    pub demo_taps: u32,
    pub demo_seed: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_coordinates: true,
            highlight: '*',
            demo_taps: 200,
            demo_seed: 0,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Loads `path` if given and present, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> ChessResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ChessErrors::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ChessErrors::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_coordinates: self.show_coordinates,
            highlight: self.highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::chess_errors::ChessErrors;
    use std::fs;
    use std::path::Path;

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(Config::load(None).expect("no path is fine"), Config::default());
        let absent = Path::new("definitely/not/here/tap_chess.yaml");
        assert_eq!(Config::load(Some(absent)).expect("absent file is fine"), Config::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let cfg = Config::from_yaml("demo_taps: 50\nhighlight: '#'\n").expect("yaml should parse");
        assert_eq!(cfg.demo_taps, 50);
        assert_eq!(cfg.highlight, '#');
        assert!(cfg.show_coordinates);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_yaml("starting_turn: white\n").is_err());
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let path = std::env::temp_dir().join(format!("tap_chess_cfg_{}.yaml", std::process::id()));
        fs::write(&path, "demo_taps: lots\n").expect("temp config should write");

        let err = Config::load(Some(path.as_path())).expect_err("bad value should fail");
        assert!(matches!(err, ChessErrors::ConfigParse { .. }));
        assert!(err.to_string().contains("tap_chess_cfg_"));

        fs::remove_file(&path).expect("temp config should delete");
    }
}
