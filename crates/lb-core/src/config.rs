//! Maze configuration
//!
//! Difficulty presets and the serializable settings a front end loads from
//! disk and merges with command-line overrides.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::consts::DEFAULT_COLLECTIBLES;
use crate::error::{MazeError, MazeResult};
use crate::maze::MazeParams;

fn config_error(err: serde_json::Error) -> MazeError {
    MazeError::Config {
        message: err.to_string(),
    }
}

/// Size presets
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// (width, height) for this preset
    pub const fn dimensions(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (17, 11),
            Difficulty::Medium => (31, 17),
            Difficulty::Hard => (41, 23),
        }
    }
}

/// Settings for one maze round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for a reproducible maze; entropy when absent
    pub seed: Option<u64>,
    pub collectibles: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

impl MazeConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let (width, height) = difficulty.dimensions();
        Self {
            width,
            height,
            seed: None,
            collectibles: DEFAULT_COLLECTIBLES,
        }
    }

    /// Parse a JSON config body. Missing fields keep their defaults.
    pub fn from_json_str(body: &str) -> MazeResult<Self> {
        serde_json::from_str(body).map_err(config_error)
    }

    pub fn to_json_string(&self) -> MazeResult<String> {
        serde_json::to_string_pretty(self).map_err(config_error)
    }

    /// Overlay the fields a JSON object sets onto this config, leaving the
    /// others untouched
    pub fn apply_json_str(&mut self, body: &str) -> MazeResult<()> {
        let patch: Value = serde_json::from_str(body).map_err(config_error)?;
        let mut current = serde_json::to_value(&*self).map_err(config_error)?;
        let (Some(fields), Some(target)) = (patch.as_object(), current.as_object_mut()) else {
            return Err(MazeError::Config {
                message: "config must be a JSON object".to_string(),
            });
        };
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
        *self = serde_json::from_value(current).map_err(config_error)?;
        Ok(())
    }

    /// Generator parameters, with dimensions normalized
    pub fn params(&self) -> MazeParams {
        MazeParams::new(self.width, self.height, self.collectibles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Easy.dimensions(), (17, 11));
        assert_eq!(Difficulty::Medium.dimensions(), (31, 17));
        assert_eq!(Difficulty::Hard.dimensions(), (41, 23));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("Easy"), Ok(Difficulty::Easy));
        assert!(Difficulty::from_str("nightmare").is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_default_config() {
        let config = MazeConfig::default();
        assert_eq!((config.width, config.height), (31, 17));
        assert_eq!(config.collectibles, 5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MazeConfig::from_json_str(r#"{ "seed": 42, "width": 8 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 17);
        assert_eq!(config.params().width, 9);
    }

    #[test]
    fn test_bad_json() {
        let err = MazeConfig::from_json_str("{ width: }").unwrap_err();
        assert!(matches!(err, MazeError::Config { .. }));
    }

    #[test]
    fn test_apply_json_overlays_preset() {
        let mut config = MazeConfig::from_difficulty(Difficulty::Easy);
        config.apply_json_str(r#"{ "seed": 9, "collectibles": 2 }"#).unwrap();
        assert_eq!((config.width, config.height), (17, 11));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.collectibles, 2);

        assert!(config.apply_json_str("[1, 2]").is_err());
        assert!(config.apply_json_str(r#"{ "width": "wide" }"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MazeConfig {
            seed: Some(7),
            ..MazeConfig::from_difficulty(Difficulty::Hard)
        };
        let body = config.to_json_string().unwrap();
        assert_eq!(MazeConfig::from_json_str(&body).unwrap(), config);
    }
}
