use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::components::{CarGeometry, CarModel, FrictionCircle, LinearTyre, QuadraticAero};
use crate::config::{ConfigError, RawCarConfig};

/// The car model a `CarConfig` builds into.
pub type LinearCar = CarModel<LinearTyre<FrictionCircle>, QuadraticAero>;

/// Where a car configuration comes from.
#[derive(Debug, Clone)]
pub enum CarSource {
    Programmed(CarType),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarType {
    FormulaStudent,
    Custom(String),
}

/// Full parameter set of a car: mass, geometry, aero and tyres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarConfig {
    /// Name of the car, defaults to the type name.
    pub name: String,
    pub car_type: CarType,
    /// Total mass (kg).
    pub mass: f64,
    pub geometry: CarGeometry,
    pub aero: QuadraticAero,
    pub tyre: LinearTyre<FrictionCircle>,
}

impl Default for CarConfig {
    /// The formula student car is chosen as the default for convenience.
    fn default() -> Self {
        Self::from_programmed(CarType::FormulaStudent)
    }
}

impl CarConfig {
    /// Creates a new car configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - A `CarSource` specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load.
    pub fn new(source: CarSource) -> Result<Self, ConfigError> {
        match source {
            CarSource::Programmed(car_type) => Ok(Self::from_programmed(car_type)),
            CarSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(car_type: CarType) -> Self {
        let name = match &car_type {
            CarType::FormulaStudent => "FormulaStudent".to_string(),
            CarType::Custom(name) => name.clone(),
        };
        Self {
            name,
            car_type,
            mass: 280.0,
            geometry: CarGeometry::formula_student(),
            aero: QuadraticAero::default(),
            tyre: LinearTyre::default(),
        }
    }

    /// Reads a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        info!("Loading car config from {}", path.as_ref().display());
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    /// Parses a configuration from YAML text in the `RawCarConfig` layout.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawCarConfig = serde_yaml::from_str(contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Maps the flat file layout onto the structured configuration and
    /// checks it.
    pub fn from_raw_config(raw: RawCarConfig) -> Result<Self, ConfigError> {
        debug!("Converting raw config for {}", raw.name);
        let config = Self {
            name: raw.name.clone(),
            car_type: CarType::Custom(raw.name),
            mass: raw.mass,
            geometry: CarGeometry::new(
                raw.wheelbase,
                raw.track_width,
                raw.cog_height,
                raw.front_weight_dist,
            ),
            aero: QuadraticAero::new(raw.cl_a, raw.cd_a).with_density(raw.rho),
            tyre: LinearTyre::new(
                raw.lateral_stiffness,
                raw.longitudinal_stiffness,
                FrictionCircle::new(raw.mu),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.aero.rho.is_finite() || self.aero.rho <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "air density must be positive, got {}",
                self.aero.rho
            )));
        }
        if !self.tyre.coupling.mu.is_finite() || self.tyre.coupling.mu < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "friction coefficient must be non-negative, got {}",
                self.tyre.coupling.mu
            )));
        }
        self.geometry.validate()?;
        Ok(())
    }

    /// Builds the car model, checking mass and geometry.
    pub fn build(&self) -> Result<LinearCar, ConfigError> {
        info!("Building car model {}", self.name);
        Ok(CarModel::try_new(
            self.mass,
            self.tyre,
            self.aero,
            self.geometry,
        )?)
    }
}
