use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DEFAULT_DEPTH: u8 = 5;
pub const MAX_DEPTH: u8 = 15;

/// Engine settings. The search depth is the only knob.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(depth: u8) -> Result<Self, GameError> {
        let config = Self { depth };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(GameError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_is_five_plies() {
        assert_eq!(EngineConfig::default().depth, 5);
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_depth() {
        assert_eq!(
            EngineConfig::with_depth(0),
            Err(GameError::DepthOutOfRange(0))
        );
        assert_eq!(
            EngineConfig::with_depth(16),
            Err(GameError::DepthOutOfRange(16))
        );
        assert_eq!(EngineConfig::with_depth(15).unwrap().depth, 15);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        let config: EngineConfig = serde_json::from_str(r#"{"depth":3}"#).unwrap();
        assert_eq!(config.depth, 3);
    }
}
