//! MCTS Hyperparameters Configuration
//!
//! Search budgets and exploration settings, loadable from JSON. Defaults reproduce the
//! reference agent: 100 iterations, rollouts of at most 100 moves, exploration √2, unseeded.

use crate::{Result, SnakeMctsError};
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsHyperparameters {
    /// Full selection/expansion/rollout/backpropagation passes per `run`
    /// Default: 100
    pub max_iterations: usize,

    /// Moves played by a single random rollout before it is cut off
    /// 0 evaluates the expanded child as-is
    /// Default: 100
    pub max_rollout_depth: usize,

    /// UCT exploration constant c
    /// Default: √2 (optimal for rewards in [0, 1])
    pub exploration_constant: f64,

    /// Seed of the engine's random stream, `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for MctsHyperparameters {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_rollout_depth: 100,
            exploration_constant: SQRT_2,
            seed: None,
        }
    }
}

impl MctsHyperparameters {
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SnakeMctsError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant <= 0.0 {
            return Err(SnakeMctsError::InvalidConfig(format!(
                "exploration_constant must be a positive finite number, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: MctsHyperparameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        let seed = self
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        format!(
            "iter[{}]_depth[{}]_c[{:.3}]_seed[{}]",
            self.max_iterations, self.max_rollout_depth, self.exploration_constant, seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let params = MctsHyperparameters::default();
        assert_eq!(params.max_iterations, 100);
        assert_eq!(params.max_rollout_depth, 100);
        assert_eq!(params.exploration_constant, SQRT_2);
        assert_eq!(params.seed, None);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_parameters() {
        let zero_iterations = MctsHyperparameters {
            max_iterations: 0,
            ..Default::default()
        };
        assert_matches!(zero_iterations.validate(), Err(SnakeMctsError::InvalidConfig(_)));

        let negative_c = MctsHyperparameters {
            exploration_constant: -1.0,
            ..Default::default()
        };
        assert_matches!(negative_c.validate(), Err(SnakeMctsError::InvalidConfig(_)));

        let nan_c = MctsHyperparameters {
            exploration_constant: f64::NAN,
            ..Default::default()
        };
        assert!(nan_c.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let params = MctsHyperparameters::from_json_str(r#"{"max_iterations": 50, "seed": 1}"#)
            .unwrap();
        assert_eq!(params.max_iterations, 50);
        assert_eq!(params.seed, Some(1));
        assert_eq!(params.max_rollout_depth, 100);
    }

    #[test]
    fn test_json_validation_errors() {
        assert_matches!(
            MctsHyperparameters::from_json_str(r#"{"max_iterations": 0}"#),
            Err(SnakeMctsError::InvalidConfig(_))
        );
        assert_matches!(
            MctsHyperparameters::from_json_str("not json"),
            Err(SnakeMctsError::Json(_))
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_rollout_depth": 20, "exploration_constant": 1.0}}"#).unwrap();

        let params = MctsHyperparameters::from_json_file(file.path()).unwrap();
        assert_eq!(params.max_rollout_depth, 20);
        assert_eq!(params.exploration_constant, 1.0);

        assert_matches!(
            MctsHyperparameters::from_json_file("/nonexistent/params.json"),
            Err(SnakeMctsError::Io(_))
        );
    }

    #[test]
    fn test_config_string() {
        let params = MctsHyperparameters {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(params.to_config_string(), "iter[100]_depth[100]_c[1.414]_seed[7]");
        assert!(MctsHyperparameters::default()
            .to_config_string()
            .ends_with("seed[random]"));
    }
}
