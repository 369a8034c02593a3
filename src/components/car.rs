use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::components::{AeroModel, CarGeometry, TyreModel};
use crate::utils::ModelError;

/// Tyre slip angles of the two axles of the single-track model (rad).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxleSlip {
    pub front: f64,
    pub rear: f64,
}

/// Single-track (bicycle) car made of a tyre model, an aero model and a
/// chassis geometry.
///
/// Every method is a pure function of its arguments and the configuration
/// fixed at construction. Angles are in radians, curvature in 1/m.
#[derive(Debug, Clone)]
pub struct CarModel<T, A> {
    mass: f64,
    tyre_model: T,
    aero_model: A,
    geometry: CarGeometry,
}

impl<T: TyreModel, A: AeroModel> CarModel<T, A> {
    /// Assembles a car without checking the parameters.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the car (kg).
    /// * `tyre_model` - Force laws of the tyres.
    /// * `aero_model` - Downforce and drag map.
    /// * `geometry` - Chassis dimensions.
    pub fn new(mass: f64, tyre_model: T, aero_model: A, geometry: CarGeometry) -> Self {
        debug!(
            "Building car model: mass {} kg, wheelbase {} m, front weight {}",
            mass, geometry.wheelbase, geometry.front_weight_dist
        );
        Self {
            mass,
            tyre_model,
            aero_model,
            geometry,
        }
    }

    /// Assembles a car, rejecting a non-positive mass or an invalid geometry.
    pub fn try_new(
        mass: f64,
        tyre_model: T,
        aero_model: A,
        geometry: CarGeometry,
    ) -> Result<Self, ModelError> {
        if !mass.is_finite() || mass <= 0.0 {
            warn!("Rejecting car model with mass {}", mass);
            return Err(ModelError::InvalidParameter(format!(
                "mass must be positive, got {}",
                mass
            )));
        }
        geometry.validate()?;
        Ok(Self::new(mass, tyre_model, aero_model, geometry))
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn tyre_model(&self) -> &T {
        &self.tyre_model
    }

    pub fn aero_model(&self) -> &A {
        &self.aero_model
    }

    pub fn geometry(&self) -> &CarGeometry {
        &self.geometry
    }

    /// Centripetal force (N) needed to follow `curvature` at `speed` (m/s).
    pub fn required_lateral_force(&self, speed: f64, curvature: f64) -> f64 {
        self.mass * speed.powi(2) * curvature
    }

    /// Slip angle of the body at the centre of gravity.
    ///
    /// Uses `atan2`, so all four quadrants and a zero longitudinal velocity
    /// are handled.
    pub fn body_slip_angle(&self, lateral_velocity: f64, longitudinal_velocity: f64) -> f64 {
        lateral_velocity.atan2(longitudinal_velocity)
    }

    /// Body slip referred to the front axle.
    pub fn front_body_slip_angle(&self, body_slip: f64, curvature: f64) -> f64 {
        body_slip + self.geometry.front_axle_distance() * curvature
    }

    /// Body slip referred to the rear axle.
    pub fn back_body_slip_angle(&self, body_slip: f64, curvature: f64) -> f64 {
        body_slip - self.geometry.rear_axle_distance() * curvature
    }

    pub fn front_slip_angle(&self, front_body_slip: f64, steering_angle: f64) -> f64 {
        front_body_slip - steering_angle
    }

    /// The rear wheels do not steer, so this is the rear body slip itself.
    pub fn back_slip_angle(&self, back_body_slip: f64) -> f64 {
        back_body_slip
    }

    /// Steering angle consistent with a pair of axle slip angles on a path
    /// of the given curvature.
    ///
    /// The slips are taken as wheel heading minus velocity direction, the
    /// negation of what `front_slip_angle` and `back_slip_angle` return.
    pub fn steering_angle(&self, front_slip: f64, curvature: f64, back_slip: f64) -> f64 {
        front_slip + curvature * self.geometry.wheelbase - back_slip
    }

    /// Front and rear tyre slip angles for a body slip, path curvature and
    /// steering input.
    pub fn axle_slip_angles(
        &self,
        body_slip: f64,
        curvature: f64,
        steering_angle: f64,
    ) -> AxleSlip {
        let front_body_slip = self.front_body_slip_angle(body_slip, curvature);
        let back_body_slip = self.back_body_slip_angle(body_slip, curvature);
        AxleSlip {
            front: self.front_slip_angle(front_body_slip, steering_angle),
            rear: self.back_slip_angle(back_body_slip),
        }
    }

    /// Highest speed (m/s) the car can hold on a path of `curvature`.
    ///
    /// There is no limit-handling solver yet, so this always returns
    /// `ModelError::NotImplemented`.
    // TODO: root-find the speed where required_lateral_force meets the
    // tyre capacity at the aero-loaded axle loads.
    pub fn max_speed_over_curvature(&self, curvature: f64) -> Result<f64, ModelError> {
        warn!(
            "max_speed_over_curvature called for curvature {} but has no solver",
            curvature
        );
        Err(ModelError::NotImplemented("max_speed_over_curvature"))
    }
}
