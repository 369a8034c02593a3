use approx::assert_relative_eq;
use lapsim::{LoadTransfer, TyreModel};

/// Assert that two load transfers are approximately equal
#[track_caller]
pub fn assert_load_transfer_eq(actual: &LoadTransfer, front: f64, rear: f64, epsilon: f64) {
    assert_relative_eq!(actual.front_transfer_n, front, epsilon = epsilon);
    assert_relative_eq!(actual.rear_transfer_n, rear, epsilon = epsilon);
}

/// Assert that a coupling law stays inside [0, mu * normal_load] for every
/// applied force up to that limit, and is exhausted at the limit itself
#[track_caller]
pub fn assert_within_friction_limit<T: TyreModel>(tyre: &T, normal_load: f64, mu: f64) {
    let limit = mu * normal_load;
    let steps = 40;
    for i in 0..=steps {
        let given = limit * (2.0 * i as f64 / steps as f64 - 1.0);
        let remaining = tyre.force_coupling(given, normal_load);
        assert!(
            remaining >= 0.0,
            "Negative capacity {} for applied force {} at load {}",
            remaining,
            given,
            normal_load
        );
        assert!(
            remaining <= limit,
            "Capacity {} above friction limit {} for applied force {}",
            remaining,
            limit,
            given
        );
    }
    assert_eq!(tyre.force_coupling(limit, normal_load), 0.0);
    assert_eq!(tyre.force_coupling(-limit, normal_load), 0.0);
}
