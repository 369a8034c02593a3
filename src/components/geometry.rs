use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::{ModelError, GRAVITY};

/// Static dimensions of the car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarGeometry {
    /// Distance between front and rear axles (m).
    pub wheelbase: f64,
    /// Distance between left and right wheel centres (m).
    pub track_width: f64,
    /// Height of the centre of gravity above the ground (m).
    pub cog_height: f64,
    /// Fraction of the static weight carried by the front axle (0 to 1).
    pub front_weight_dist: f64,
}

/// Normal load moved by an acceleration, per axle (N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadTransfer {
    #[serde(rename = "front_transfer_N")]
    pub front_transfer_n: f64,
    #[serde(rename = "rear_transfer_N")]
    pub rear_transfer_n: f64,
}

/// Static normal load per axle (N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleLoads {
    pub front: f64,
    pub rear: f64,
}

impl CarGeometry {
    /// Creates a new `CarGeometry` without checking the parameters.
    ///
    /// # Arguments
    /// * `wheelbase` - Axle to axle distance (m).
    /// * `track_width` - Track width (m).
    /// * `cog_height` - Centre of gravity height (m).
    /// * `front_weight_dist` - Front axle weight fraction (-).
    pub fn new(wheelbase: f64, track_width: f64, cog_height: f64, front_weight_dist: f64) -> Self {
        Self {
            wheelbase,
            track_width,
            cog_height,
            front_weight_dist,
        }
    }

    /// Creates a new `CarGeometry`, rejecting parameters that would make the
    /// load transfer formulas meaningless.
    ///
    /// # Returns
    /// `ModelError::InvalidParameter` when the wheelbase or track width is not
    /// strictly positive, the CoG height is negative, or the weight
    /// distribution lies outside [0, 1].
    pub fn try_new(
        wheelbase: f64,
        track_width: f64,
        cog_height: f64,
        front_weight_dist: f64,
    ) -> Result<Self, ModelError> {
        let geometry = Self::new(wheelbase, track_width, cog_height, front_weight_dist);
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks the parameters of an existing geometry.
    pub fn validate(&self) -> Result<(), ModelError> {
        let problem = if !self.wheelbase.is_finite() || self.wheelbase <= 0.0 {
            Some(format!("wheelbase must be positive, got {}", self.wheelbase))
        } else if !self.track_width.is_finite() || self.track_width <= 0.0 {
            Some(format!("track width must be positive, got {}", self.track_width))
        } else if !self.cog_height.is_finite() || self.cog_height < 0.0 {
            Some(format!("cog height must be non-negative, got {}", self.cog_height))
        } else if !(0.0..=1.0).contains(&self.front_weight_dist) {
            Some(format!(
                "front weight distribution must lie in [0, 1], got {}",
                self.front_weight_dist
            ))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                warn!("Rejecting car geometry: {}", msg);
                Err(ModelError::InvalidParameter(msg))
            }
            None => Ok(()),
        }
    }

    /// Small formula-student style car.
    pub fn formula_student() -> Self {
        Self::new(1.53, 1.25, 0.33, 0.45)
    }

    /// Distance from the CoG to the front axle (m).
    pub fn front_axle_distance(&self) -> f64 {
        self.wheelbase * self.front_weight_dist
    }

    /// Distance from the CoG to the rear axle (m).
    pub fn rear_axle_distance(&self) -> f64 {
        self.wheelbase * (1.0 - self.front_weight_dist)
    }

    /// Axle loads of a car of `total_mass` (kg) standing still.
    pub fn static_axle_loads(&self, total_mass: f64) -> AxleLoads {
        let weight = total_mass * GRAVITY;
        AxleLoads {
            front: weight * self.front_weight_dist,
            rear: weight * (1.0 - self.front_weight_dist),
        }
    }

    /// Lateral load transfer in steady cornering.
    ///
    /// The total transfer `m * a * h / track` is split between the axles by
    /// the static weight distribution. Its sign follows `lateral_accel`.
    ///
    /// # Arguments
    /// * `total_mass` - Total mass of the car (kg).
    /// * `lateral_accel` - Lateral acceleration (m/s²).
    pub fn static_lateral_load_transfer(
        &self,
        total_mass: f64,
        lateral_accel: f64,
    ) -> LoadTransfer {
        let total = total_mass * lateral_accel * self.cog_height / self.track_width;
        LoadTransfer {
            front_transfer_n: total * self.front_weight_dist,
            rear_transfer_n: total * (1.0 - self.front_weight_dist),
        }
    }

    /// Longitudinal load transfer under acceleration or braking.
    ///
    /// `front_transfer_n` is the load removed from the front axle and
    /// `rear_transfer_n` its negation, so a positive (accelerating)
    /// `longitudinal_accel` unloads the front. No weight distribution is
    /// applied.
    ///
    /// # Arguments
    /// * `total_mass` - Total mass of the car (kg).
    /// * `longitudinal_accel` - Longitudinal acceleration (m/s²), negative
    ///   when braking.
    pub fn static_longitudinal_load_transfer(
        &self,
        total_mass: f64,
        longitudinal_accel: f64,
    ) -> LoadTransfer {
        let load_transfer = total_mass * longitudinal_accel * self.cog_height / self.wheelbase;
        LoadTransfer {
            front_transfer_n: load_transfer,
            rear_transfer_n: -load_transfer,
        }
    }
}

impl Default for CarGeometry {
    fn default() -> Self {
        Self::formula_student()
    }
}
