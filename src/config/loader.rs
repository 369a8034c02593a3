use serde::Deserialize;
use thiserror::Error;

use crate::utils::{ModelError, AIR_DENSITY};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid car configuration: {0}")]
    ValidationError(String),
}

impl From<ModelError> for ConfigError {
    fn from(err: ModelError) -> Self {
        ConfigError::ValidationError(err.to_string())
    }
}

/// Flat on-disk layout of a car parameter file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCarConfig {
    /// Car identification
    pub name: String,

    /// Mass (kg)
    pub mass: f64,

    /// Geometry (m, and a fraction for the weight distribution)
    pub wheelbase: f64,
    pub track_width: f64,
    pub cog_height: f64,
    pub front_weight_dist: f64,

    /// Aero areas (m²) and air density (kg/m³)
    pub cl_a: f64,
    pub cd_a: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,

    /// Linear tyre stiffnesses and friction coefficient
    pub lateral_stiffness: f64,
    pub longitudinal_stiffness: f64,
    #[serde(default = "default_mu")]
    pub mu: f64,
}

fn default_rho() -> f64 {
    AIR_DENSITY
}

fn default_mu() -> f64 {
    1.0
}
