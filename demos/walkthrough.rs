use lapsim::{
    utils::{curvature_from_radius, deg_to_rad, rad_to_deg, GRAVITY},
    AeroModel, CarConfig, CouplingLaw, FrictionEllipse, GenericTyreModel, TyreModel,
};

// Walks through the tyre, aero and chassis models of the default
// formula student car and prints the intermediate results.

fn tyre_example() {
    println!("TYRE EXAMPLE");

    let tyre = GenericTyreModel::new(
        |slip_angle: f64, normal_load: f64| 10.0 * normal_load * slip_angle,
        |slip_ratio: f64, normal_load: f64| 12.0 * normal_load * slip_ratio,
        |given: f64, normal_load: f64| {
            if given.abs() <= normal_load {
                (normal_load.powi(2) - given.powi(2)).max(0.0).sqrt()
            } else {
                0.0
            }
        },
    );

    let normal_load = 3000.0;
    let slip_angle = 0.05;
    let slip_ratio = 0.1;

    let lat_force = tyre.lateral_force(slip_angle, normal_load);
    let long_force = tyre.longitudinal_force(slip_ratio, normal_load);
    let remaining_lat = tyre.force_coupling(long_force, normal_load);
    let remaining_long = tyre.force_coupling(lat_force, normal_load);

    println!("Normal load: {normal_load} N");
    println!("Slip angle: {slip_angle} rad -> lateral force: {lat_force:.1} N");
    println!("Slip ratio: {slip_ratio} -> longitudinal force: {long_force:.1} N");
    println!("Lateral capacity left after {long_force:.1} N longitudinal: {remaining_lat:.1} N");
    println!("Longitudinal capacity left after {lat_force:.1} N lateral: {remaining_long:.1} N");

    // Grippier laterally than longitudinally.
    let ellipse = FrictionEllipse::new(1.2, 1.5);
    let brake_force = 1800.0;
    let corner_force = 2400.0;
    let lat_left = ellipse.remaining_force(brake_force, normal_load);
    let long_left = ellipse.swapped().remaining_force(corner_force, normal_load);
    println!("Ellipse: lateral left after {brake_force:.1} N braking: {lat_left:.1} N");
    println!("Ellipse: braking left after {corner_force:.1} N cornering: {long_left:.1} N");
}

fn car_example(config: &CarConfig) -> Result<(), Box<dyn std::error::Error>> {
    let car = config.build()?;

    println!("AERO EXAMPLE");
    let velocity = 12.0;
    println!("Velocity: {velocity} m/s");
    println!("Downforce: {:.1} N", car.aero_model().downforce(velocity));
    println!("Drag: {:.1} N", car.aero_model().drag(velocity));
    println!();

    println!("CHASSIS EXAMPLE");
    let lateral_accel = 2.0 * GRAVITY;
    let longitudinal_accel = 1.5 * GRAVITY;
    let lateral = car
        .geometry()
        .static_lateral_load_transfer(car.mass(), lateral_accel);
    let longitudinal = car
        .geometry()
        .static_longitudinal_load_transfer(car.mass(), longitudinal_accel);
    println!("Lateral acceleration {lateral_accel:.2} m/s^2");
    println!("  front transfer: {:.1} N", lateral.front_transfer_n);
    println!("  rear transfer: {:.1} N", lateral.rear_transfer_n);
    println!("Longitudinal acceleration {longitudinal_accel:.2} m/s^2");
    println!("  front transfer: {:.1} N", longitudinal.front_transfer_n);
    println!("  rear transfer: {:.1} N", longitudinal.rear_transfer_n);
    println!();

    println!("BICYCLE MODEL EXAMPLE");
    let speed = 15.0;
    let radius = 20.0;
    let curvature = curvature_from_radius(radius);
    let steer = deg_to_rad(4.0);
    let slip = car.axle_slip_angles(0.0, curvature, steer);
    let lateral_force = car.required_lateral_force(speed, curvature);
    println!("Required lateral force at {speed} m/s on a {radius} m radius: {lateral_force:.1} N");
    println!(
        "Front slip: {:.2} deg, rear slip: {:.2} deg",
        rad_to_deg(slip.front),
        rad_to_deg(slip.rear)
    );
    match car.max_speed_over_curvature(curvature) {
        Ok(v_max) => println!("Max speed: {v_max:.1} m/s"),
        Err(e) => println!("Max speed unavailable: {e}"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tyre_example();
    println!();
    car_example(&CarConfig::default())
}
