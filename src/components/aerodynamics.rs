use serde::{Deserialize, Serialize};

use crate::utils::AIR_DENSITY;

/// Aerodynamic map of the car as a function of speed.
///
/// Neither force is range checked. Both are expected to grow with |speed|
/// but nothing here enforces it.
pub trait AeroModel {
    /// Downforce (N) at `speed` (m/s).
    fn downforce(&self, speed: f64) -> f64;
    /// Drag (N) at `speed` (m/s).
    fn drag(&self, speed: f64) -> f64;
}

/// Aero model built from two user-supplied laws, e.g. a fitted polynomial or
/// an interpolated lookup table.
#[derive(Clone)]
pub struct GenericAeroModel<D, G> {
    downforce_law: D,
    drag_law: G,
}

impl<D, G> GenericAeroModel<D, G>
where
    D: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    pub fn new(downforce_law: D, drag_law: G) -> Self {
        Self {
            downforce_law,
            drag_law,
        }
    }
}

impl<D, G> AeroModel for GenericAeroModel<D, G>
where
    D: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    fn downforce(&self, speed: f64) -> f64 {
        (self.downforce_law)(speed)
    }

    fn drag(&self, speed: f64) -> f64 {
        (self.drag_law)(speed)
    }
}

impl<D, G> std::fmt::Debug for GenericAeroModel<D, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericAeroModel").finish_non_exhaustive()
    }
}

/// Constant-coefficient aero: F = 0.5 * rho * (C * A) * v^2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticAero {
    /// Downforce area, lift coefficient times reference area (m²).
    pub cl_a: f64,
    /// Drag area, drag coefficient times reference area (m²).
    pub cd_a: f64,
    /// Air density (kg/m³).
    #[serde(default = "default_density")]
    pub rho: f64,
}

fn default_density() -> f64 {
    AIR_DENSITY
}

impl QuadraticAero {
    /// Creates a model at the default air density.
    ///
    /// # Arguments
    /// * `cl_a` - Downforce area (m²).
    /// * `cd_a` - Drag area (m²).
    pub fn new(cl_a: f64, cd_a: f64) -> Self {
        Self {
            cl_a,
            cd_a,
            rho: AIR_DENSITY,
        }
    }

    /// The same car in air of a different density (kg/m³).
    pub fn with_density(self, rho: f64) -> Self {
        Self { rho, ..self }
    }

    /// Dynamic pressure (Pa) at `speed` (m/s).
    pub fn dynamic_pressure(&self, speed: f64) -> f64 {
        0.5 * self.rho * speed.powi(2)
    }
}

impl Default for QuadraticAero {
    fn default() -> Self {
        Self::new(4.3, 1.7)
    }
}

impl AeroModel for QuadraticAero {
    fn downforce(&self, speed: f64) -> f64 {
        self.dynamic_pressure(speed) * self.cl_a
    }

    fn drag(&self, speed: f64) -> f64 {
        self.dynamic_pressure(speed) * self.cd_a
    }
}
