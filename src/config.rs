//! Simulation parameters and config file loading

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default safety ceiling on steps per trial. Orders of magnitude above the
/// distribution mass for any sane configuration, small enough to fail fast on
/// configurations that can never cover the map.
pub const DEFAULT_STEP_CEILING: u64 = 10_000_000;

/// Input bundle for one simulation run.
///
/// Loadable from YAML or JSON; every field has a default so partial config
/// files work:
///
/// ```yaml
/// dice_count: 2
/// faces_per_die: 6
/// block_count: 10
/// trial_count: 10000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of dice rolled per step (>= 1)
    #[serde(default = "SimulationConfig::default_dice_count")]
    pub dice_count: u32,
    /// Faces per die (>= 2)
    #[serde(default = "SimulationConfig::default_faces_per_die")]
    pub faces_per_die: u32,
    /// Number of blocks on the circular map (>= 2)
    #[serde(default = "SimulationConfig::default_block_count")]
    pub block_count: u32,
    /// Number of trials to run (>= 1)
    #[serde(default = "SimulationConfig::default_trial_count")]
    pub trial_count: u32,
    /// Maximum steps a single trial may take before it is aborted with
    /// [`SimError::Timeout`](crate::error::SimError::Timeout)
    #[serde(default = "SimulationConfig::default_step_ceiling")]
    pub step_ceiling: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dice_count: 1,
            faces_per_die: 6,
            block_count: 10,
            trial_count: 10_000,
            step_ceiling: DEFAULT_STEP_CEILING,
        }
    }
}

impl SimulationConfig {
    fn default_dice_count() -> u32 {
        1
    }

    fn default_faces_per_die() -> u32 {
        6
    }

    fn default_block_count() -> u32 {
        10
    }

    fn default_trial_count() -> u32 {
        10_000
    }

    fn default_step_ceiling() -> u64 {
        DEFAULT_STEP_CEILING
    }

    /// Check every field against its documented minimum. Called before any
    /// trial runs.
    pub fn validate(&self) -> Result<()> {
        if self.dice_count < 1 {
            return Err(SimError::InvalidConfig(format!(
                "dice_count must be >= 1, got {}",
                self.dice_count
            )));
        }
        if self.faces_per_die < 2 {
            return Err(SimError::InvalidConfig(format!(
                "faces_per_die must be >= 2, got {}",
                self.faces_per_die
            )));
        }
        if self.block_count < 2 {
            return Err(SimError::InvalidConfig(format!(
                "block_count must be >= 2, got {}",
                self.block_count
            )));
        }
        if self.trial_count < 1 {
            return Err(SimError::InvalidConfig(format!(
                "trial_count must be >= 1, got {}",
                self.trial_count
            )));
        }
        if self.step_ceiling < 1 {
            return Err(SimError::InvalidConfig(format!(
                "step_ceiling must be >= 1, got {}",
                self.step_ceiling
            )));
        }
        Ok(())
    }

    /// Load a configuration from a YAML or JSON file, chosen by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let path_str = path.as_ref().to_string_lossy().to_lowercase();

        let config: SimulationConfig = if path_str.ends_with(".json") {
            serde_json::from_str(&content).map_err(|e| SimError::Parse(e.to_string()))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| SimError::Parse(e.to_string()))?
        };
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SimulationConfig::default();
        assert_eq!(config.dice_count, 1);
        assert_eq!(config.faces_per_die, 6);
        assert_eq!(config.block_count, 10);
        assert_eq!(config.trial_count, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_values_below_minimums() {
        let cases = [
            SimulationConfig {
                dice_count: 0,
                ..Default::default()
            },
            SimulationConfig {
                faces_per_die: 1,
                ..Default::default()
            },
            SimulationConfig {
                block_count: 1,
                ..Default::default()
            },
            SimulationConfig {
                trial_count: 0,
                ..Default::default()
            },
            SimulationConfig {
                step_ceiling: 0,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(SimError::InvalidConfig(_))),
                "expected rejection for {config:?}"
            );
        }
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: SimulationConfig = serde_yaml::from_str("dice_count: 2\nblock_count: 12\n")
            .expect("partial yaml should deserialize");
        assert_eq!(config.dice_count, 2);
        assert_eq!(config.block_count, 12);
        assert_eq!(config.faces_per_die, 6);
        assert_eq!(config.trial_count, 10_000);
        assert_eq!(config.step_ceiling, DEFAULT_STEP_CEILING);
    }
}
