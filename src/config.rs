use crate::constants::{
    DEFAULT_INTERPOLATION_DEPTH, DEFAULT_NPATHS, MAX_INTERPOLATION_DEPTH,
    PRESENT_DAY_TEMPERATURE_WINDOW,
};
use crate::error::{PathGenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Construction parameters for a `MonteCarloPathGenerator`.
///
/// Only the two ranges are required in JSON; everything else falls back to
/// the crate defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub time_range: (f64, f64),
    pub temperature_range: (f64, f64),
    #[serde(default = "default_npaths")]
    pub npaths: usize,
    #[serde(default = "default_interpolation_depth")]
    pub interpolation_depth: u32,
    #[serde(default = "default_present_day_temperature")]
    pub present_day_temperature: (f64, f64),
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_npaths() -> usize {
    DEFAULT_NPATHS
}

fn default_interpolation_depth() -> u32 {
    DEFAULT_INTERPOLATION_DEPTH
}

fn default_present_day_temperature() -> (f64, f64) {
    PRESENT_DAY_TEMPERATURE_WINDOW
}

impl GeneratorConfig {
    pub fn new(time_range: (f64, f64), temperature_range: (f64, f64)) -> Self {
        GeneratorConfig {
            time_range,
            temperature_range,
            npaths: DEFAULT_NPATHS,
            interpolation_depth: DEFAULT_INTERPOLATION_DEPTH,
            present_day_temperature: PRESENT_DAY_TEMPERATURE_WINDOW,
            seed: None,
        }
    }

    pub fn with_npaths(mut self, npaths: usize) -> Self {
        self.npaths = npaths;
        self
    }

    pub fn with_interpolation_depth(mut self, depth: u32) -> Self {
        self.interpolation_depth = depth;
        self
    }

    pub fn with_present_day_temperature(mut self, window: (f64, f64)) -> Self {
        self.present_day_temperature = window;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a config from a JSON file on disk
    pub fn from_json_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|source| PathGenError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json_str)
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let config: GeneratorConfig =
            serde_json::from_str(json_str).map_err(PathGenError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ensemble size and interpolation depth.
    ///
    /// Range scales are checked separately when `ScaleFactors` are derived.
    pub fn validate(&self) -> Result<()> {
        if self.npaths == 0 {
            return Err(PathGenError::InvalidConfiguration(
                "npaths must be greater than zero".to_string(),
            ));
        }
        if self.interpolation_depth > MAX_INTERPOLATION_DEPTH {
            return Err(PathGenError::InvalidConfiguration(format!(
                "interpolation depth {} exceeds the maximum of {}",
                self.interpolation_depth, MAX_INTERPOLATION_DEPTH
            )));
        }
        Ok(())
    }

    /// Points contributed by each constraint: 2^depth.
    pub fn points_per_constraint(&self) -> usize {
        1usize << self.interpolation_depth
    }
}
