use serde::{Deserialize, Serialize};

/// A combined-slip law: how much force a tyre can still produce in one
/// direction once `given_force` is already being used in the orthogonal one.
///
/// Implementations should return a non-negative value that reaches 0 when the
/// friction limit is exhausted. `TyreModel::force_coupling` does not clamp the
/// result, so a law that breaks this contract leaks straight through to it.
pub trait CouplingLaw {
    fn remaining_force(&self, given_force: f64, normal_load: f64) -> f64;
}

impl<F> CouplingLaw for F
where
    F: Fn(f64, f64) -> f64,
{
    fn remaining_force(&self, given_force: f64, normal_load: f64) -> f64 {
        self(given_force, normal_load)
    }
}

/// Circular friction envelope with limit `mu * normal_load`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionCircle {
    /// Friction coefficient (-).
    pub mu: f64,
}

impl FrictionCircle {
    pub fn new(mu: f64) -> Self {
        Self { mu }
    }
}

impl Default for FrictionCircle {
    /// Unit friction coefficient, so the limit equals the normal load.
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CouplingLaw for FrictionCircle {
    fn remaining_force(&self, given_force: f64, normal_load: f64) -> f64 {
        let limit = self.mu * normal_load;
        if given_force.abs() <= limit {
            (limit.powi(2) - given_force.powi(2)).max(0.0).sqrt()
        } else {
            0.0
        }
    }
}

/// Elliptical friction envelope with different limits along the two axes.
///
/// `mu_given` sets the limit in the direction of the already applied force,
/// `mu_other` the limit in the direction whose remaining capacity is returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionEllipse {
    pub mu_given: f64,
    pub mu_other: f64,
}

impl FrictionEllipse {
    pub fn new(mu_given: f64, mu_other: f64) -> Self {
        Self { mu_given, mu_other }
    }

    /// The same envelope seen from the other axis.
    pub fn swapped(&self) -> Self {
        Self::new(self.mu_other, self.mu_given)
    }
}

impl CouplingLaw for FrictionEllipse {
    fn remaining_force(&self, given_force: f64, normal_load: f64) -> f64 {
        let given_limit = self.mu_given * normal_load;
        let other_limit = self.mu_other * normal_load;
        if given_limit <= 0.0 || other_limit <= 0.0 || given_force.abs() > given_limit {
            return 0.0;
        }
        let usage = given_force / given_limit;
        other_limit * (1.0 - usage.powi(2)).max(0.0).sqrt()
    }
}
