mod common;

use approx::assert_relative_eq;
use lapsim::{
    combined_force,
    utils::{curvature_from_radius, deg_to_rad, rad_to_deg},
    AeroModel, CouplingLaw, FrictionCircle, FrictionEllipse, GenericTyreModel, LinearTyre,
    ModelError, TyreModel,
};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::common::{
    assert_load_transfer_eq, assert_within_friction_limit, create_closure_car,
    create_closure_tyre, create_test_car, create_test_geometry,
};

#[test]
fn test_friction_circle_coupling_bounds() {
    let tyre = LinearTyre::new(10.0, 12.0, FrictionCircle::new(1.0));
    assert_within_friction_limit(&tyre, 3000.0, 1.0);
    assert_within_friction_limit(&create_closure_tyre(), 4500.0, 1.0);
}

#[test]
fn test_friction_circle_unloaded_tyre_has_no_capacity() {
    let tyre = LinearTyre::new(10.0, 12.0, FrictionCircle::new(1.0));
    assert_within_friction_limit(&tyre, 0.0, 1.0);
    assert_eq!(tyre.force_coupling(0.0, 0.0), 0.0);
    assert_eq!(tyre.force_coupling(10.0, 0.0), 0.0);
}

#[test]
fn test_friction_circle_non_unit_mu() {
    for mu in [0.3, 0.8, 1.6] {
        let tyre = LinearTyre::new(10.0, 12.0, FrictionCircle::new(mu));
        assert_within_friction_limit(&tyre, 2500.0, mu);
        assert_within_friction_limit(&tyre, 0.0, mu);
    }
    let tyre = LinearTyre::new(10.0, 12.0, FrictionCircle::new(0.8));
    assert_relative_eq!(tyre.force_coupling(0.0, 2500.0), 2000.0, epsilon = 1e-9);
    assert_eq!(tyre.force_coupling(2100.0, 2500.0), 0.0);
}

#[test]
fn test_injected_coupling_law_is_trusted() {
    let tyre = GenericTyreModel::new(
        |_: f64, _: f64| 0.0,
        |_: f64, _: f64| 0.0,
        FrictionEllipse::new(1.0, 1.3),
    );
    // Elliptical capacity on the other axis exceeds the load.
    assert_relative_eq!(tyre.force_coupling(0.0, 1000.0), 1300.0, epsilon = 1e-9);
}

#[test]
fn test_body_slip_angle_atan2() {
    let car = create_test_car();
    for v in [0.5, 10.0, 80.0] {
        assert_eq!(car.body_slip_angle(0.0, v), 0.0);
        assert_relative_eq!(car.body_slip_angle(v, 0.0), FRAC_PI_2);
    }
}

#[test]
fn test_reference_load_transfers() {
    let geometry = create_test_geometry();
    assert_load_transfer_eq(
        &geometry.static_lateral_load_transfer(1200.0, 5.0),
        600.0,
        1400.0,
        1e-9,
    );
    assert_load_transfer_eq(
        &geometry.static_longitudinal_load_transfer(1200.0, 3.0),
        576.0,
        -576.0,
        1e-9,
    );
}

#[test]
fn test_required_lateral_force_reference() {
    let car = create_test_car();
    assert_relative_eq!(car.required_lateral_force(20.0, 0.02), 9600.0, epsilon = 1e-9);
}

#[test]
fn test_turn_radius_inputs() {
    let car = create_test_car();
    let curvature = curvature_from_radius(50.0);
    assert_relative_eq!(car.required_lateral_force(20.0, curvature), 9600.0, epsilon = 1e-9);

    let slip = car.axle_slip_angles(0.0, curvature, deg_to_rad(4.0));
    assert_relative_eq!(rad_to_deg(slip.front), 0.015 * 180.0 / PI - 4.0, epsilon = 1e-9);
    assert_relative_eq!(rad_to_deg(slip.rear), -0.035 * 180.0 / PI, epsilon = 1e-9);
}

#[test]
fn test_friction_ellipse_seen_from_both_axes() {
    let ellipse = FrictionEllipse::new(1.2, 1.5);
    let normal_load = 3000.0;

    assert_relative_eq!(ellipse.remaining_force(0.0, normal_load), 4500.0, epsilon = 1e-9);
    let swapped = ellipse.swapped();
    assert_relative_eq!(swapped.remaining_force(0.0, normal_load), 3600.0, epsilon = 1e-9);
    assert_relative_eq!(ellipse.remaining_force(3600.0, normal_load), 0.0, epsilon = 1e-6);
    assert_eq!(swapped.remaining_force(4600.0, normal_load), 0.0);

    // Half the braking limit leaves sqrt(3)/2 of the cornering limit, and
    // cornering at that force leaves the same braking force back.
    let lat_left = ellipse.remaining_force(1800.0, normal_load);
    assert_relative_eq!(lat_left, 4500.0 * 0.75f64.sqrt(), epsilon = 1e-9);
    let long_left = swapped.remaining_force(lat_left, normal_load);
    assert_relative_eq!(long_left, 1800.0, epsilon = 1e-6);
}

#[test]
fn test_steering_recovered_from_axle_slips() {
    let car = create_test_car();
    let (body_slip, curvature, steer) = (0.015, 0.02, 0.06);
    let front_body = car.front_body_slip_angle(body_slip, curvature);
    let back_body = car.back_body_slip_angle(body_slip, curvature);
    let front = car.front_slip_angle(front_body, steer);
    let back = car.back_slip_angle(back_body);
    assert_relative_eq!(car.steering_angle(-front, curvature, -back), steer, epsilon = 1e-12);
}

#[test]
fn test_max_speed_always_signals_not_implemented() {
    let car = create_test_car();
    for curvature in [0.0, 0.01, -0.05, 1.0] {
        assert!(matches!(
            car.max_speed_over_curvature(curvature),
            Err(ModelError::NotImplemented(_))
        ));
    }
    assert!(create_closure_car().max_speed_over_curvature(0.02).is_err());
}

#[test]
fn test_closure_car_matches_linear_car() {
    let linear = create_test_car();
    let closures = create_closure_car();

    for speed in [0.0, 10.0, 35.0] {
        assert_relative_eq!(
            closures.aero_model().downforce(speed),
            linear.aero_model().downforce(speed),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            closures.aero_model().drag(speed),
            linear.aero_model().drag(speed),
            epsilon = 1e-9
        );
    }
    assert_relative_eq!(
        closures.tyre_model().lateral_force(0.03, 2500.0),
        linear.tyre_model().lateral_force(0.03, 2500.0),
        epsilon = 1e-9
    );
}

#[test]
fn test_cornering_budget_with_aero_and_load_transfer() {
    // Front axle budget of a car cornering at 20 m/s on a 50 m radius.
    let car = create_test_car();
    let (speed, curvature) = (20.0, 0.02);
    let geometry = car.geometry();

    let lateral_accel = speed * speed * curvature;
    let static_loads = geometry.static_axle_loads(car.mass());
    let downforce = car.aero_model().downforce(speed);
    let front_load = static_loads.front + downforce * geometry.front_weight_dist;
    let transfer = geometry.static_lateral_load_transfer(car.mass(), lateral_accel);
    assert!(transfer.front_transfer_n < front_load);

    let slip = car.axle_slip_angles(0.0, curvature, 0.08);
    let force = combined_force(car.tyre_model(), slip.front, 0.01, front_load);
    let budget = car.tyre_model().force_coupling(force.x, front_load);
    assert!(force.y.abs() <= budget + 1e-9);
    assert!(force.norm() <= front_load + 1e-6);
}
