use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::coupling::{CouplingLaw, FrictionCircle};

/// Force laws of a single (axle-lumped) tyre.
///
/// All three methods are pure. No input range is enforced: slip angles may be
/// any value and negative loads are passed through to the underlying law.
pub trait TyreModel {
    /// Lateral force (N) for a slip angle (rad) and normal load (N).
    fn lateral_force(&self, slip_angle: f64, normal_load: f64) -> f64;

    /// Longitudinal force (N) for a slip ratio (-) and normal load (N).
    fn longitudinal_force(&self, slip_ratio: f64, normal_load: f64) -> f64;

    /// Remaining orthogonal force capacity (N) once `given_force` (N) is
    /// being produced at `normal_load` (N).
    fn force_coupling(&self, given_force: f64, normal_load: f64) -> f64;
}

/// Tyre built from three user-supplied laws.
///
/// ```
/// use lapsim::components::{GenericTyreModel, TyreModel};
///
/// let tyre = GenericTyreModel::new(
///     |alpha: f64, fz: f64| 10.0 * fz * alpha,
///     |kappa: f64, fz: f64| 12.0 * fz * kappa,
///     |given: f64, fz: f64| (fz * fz - given * given).max(0.0).sqrt(),
/// );
/// assert_eq!(tyre.lateral_force(0.5, 2000.0), 10000.0);
/// ```
#[derive(Clone)]
pub struct GenericTyreModel<Lat, Lon, C> {
    lateral_law: Lat,
    longitudinal_law: Lon,
    coupling_law: C,
}

impl<Lat, Lon, C> GenericTyreModel<Lat, Lon, C>
where
    Lat: Fn(f64, f64) -> f64,
    Lon: Fn(f64, f64) -> f64,
    C: CouplingLaw,
{
    pub fn new(lateral_law: Lat, longitudinal_law: Lon, coupling_law: C) -> Self {
        Self {
            lateral_law,
            longitudinal_law,
            coupling_law,
        }
    }
}

impl<Lat, Lon, C> TyreModel for GenericTyreModel<Lat, Lon, C>
where
    Lat: Fn(f64, f64) -> f64,
    Lon: Fn(f64, f64) -> f64,
    C: CouplingLaw,
{
    fn lateral_force(&self, slip_angle: f64, normal_load: f64) -> f64 {
        (self.lateral_law)(slip_angle, normal_load)
    }

    fn longitudinal_force(&self, slip_ratio: f64, normal_load: f64) -> f64 {
        (self.longitudinal_law)(slip_ratio, normal_load)
    }

    fn force_coupling(&self, given_force: f64, normal_load: f64) -> f64 {
        self.coupling_law.remaining_force(given_force, normal_load)
    }
}

impl<Lat, Lon, C> std::fmt::Debug for GenericTyreModel<Lat, Lon, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericTyreModel").finish_non_exhaustive()
    }
}

/// Linear tyre: force = stiffness * normal load * slip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTyre<C = FrictionCircle> {
    /// Lateral force per unit load per radian of slip angle (1/rad).
    pub lateral_stiffness: f64,
    /// Longitudinal force per unit load per unit slip ratio (-).
    pub longitudinal_stiffness: f64,
    pub coupling: C,
}

impl<C: CouplingLaw> LinearTyre<C> {
    pub fn new(lateral_stiffness: f64, longitudinal_stiffness: f64, coupling: C) -> Self {
        Self {
            lateral_stiffness,
            longitudinal_stiffness,
            coupling,
        }
    }
}

impl Default for LinearTyre<FrictionCircle> {
    fn default() -> Self {
        Self::new(10.0, 12.0, FrictionCircle::default())
    }
}

impl<C: CouplingLaw> TyreModel for LinearTyre<C> {
    fn lateral_force(&self, slip_angle: f64, normal_load: f64) -> f64 {
        self.lateral_stiffness * normal_load * slip_angle
    }

    fn longitudinal_force(&self, slip_ratio: f64, normal_load: f64) -> f64 {
        self.longitudinal_stiffness * normal_load * slip_ratio
    }

    fn force_coupling(&self, given_force: f64, normal_load: f64) -> f64 {
        self.coupling.remaining_force(given_force, normal_load)
    }
}

/// Combined tyre force with longitudinal priority.
///
/// The longitudinal force is applied as the law gives it; the lateral force
/// keeps its sign but its magnitude is capped at the coupling budget the
/// longitudinal force leaves over. A negative or NaN budget from the
/// coupling law counts as no capacity left.
///
/// # Returns
/// `Vector2` with x = longitudinal force (N) and y = lateral force (N).
pub fn combined_force<T: TyreModel + ?Sized>(
    tyre: &T,
    slip_angle: f64,
    slip_ratio: f64,
    normal_load: f64,
) -> Vector2<f64> {
    let longitudinal = tyre.longitudinal_force(slip_ratio, normal_load);
    let lateral = tyre.lateral_force(slip_angle, normal_load);
    let budget = tyre.force_coupling(longitudinal, normal_load).max(0.0);
    Vector2::new(longitudinal, lateral.signum() * lateral.abs().min(budget))
}
