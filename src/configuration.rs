use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::extrapolation::stepsequence::{
    StepAccumulation,
    StepSequence
};

pub const DEFAULT_STEP_LIMIT: usize = 1000;
pub const DEFAULT_STEP_SIZE: f64 = 0.001;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("step size must be finite, got {0}")]
    InvalidStepSize(f64)
}

/// 外插步進設定。
///
/// JSON 中缺少的欄位取預設值：
///
/// ```json
/// { "step_limit": 1000, "step_size": 0.001, "accumulation": "additive" }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrapolationConfig {
    step_limit: usize,
    step_size: f64,
    accumulation: StepAccumulation
}

impl Default for ExtrapolationConfig {
    fn default() -> ExtrapolationConfig {
        ExtrapolationConfig {
            step_limit: DEFAULT_STEP_LIMIT,
            step_size: DEFAULT_STEP_SIZE,
            accumulation: StepAccumulation::Additive
        }
    }
}

impl ExtrapolationConfig {
    pub fn new(step_limit: usize,
               step_size: f64,
               accumulation: StepAccumulation) -> Result<ExtrapolationConfig, ConfigurationError> {
        let config = ExtrapolationConfig {
            step_limit,
            step_size,
            accumulation
        };
        config.validate()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ExtrapolationConfig, ConfigurationError> {
        let config: ExtrapolationConfig = serde_json::from_reader(reader)?;
        config.validate()
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<ExtrapolationConfig, ConfigurationError> {
        let file = File::open(file_path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn accumulation(&self) -> StepAccumulation {
        self.accumulation
    }

    pub fn with_step_limit(self, step_limit: usize) -> ExtrapolationConfig {
        ExtrapolationConfig { step_limit, ..self }
    }

    pub fn with_step_size(self, step_size: f64) -> Result<ExtrapolationConfig, ConfigurationError> {
        ExtrapolationConfig { step_size, ..self }.validate()
    }

    pub fn with_accumulation(self, accumulation: StepAccumulation) -> ExtrapolationConfig {
        ExtrapolationConfig { accumulation, ..self }
    }

    pub fn steps(&self) -> StepSequence {
        StepSequence::new(self.step_size, self.step_limit, self.accumulation)
    }

    fn validate(self) -> Result<ExtrapolationConfig, ConfigurationError> {
        if !self.step_size.is_finite() {
            return Err(ConfigurationError::InvalidStepSize(self.step_size));
        }
        Ok(self)
    }
}
