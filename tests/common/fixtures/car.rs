use lapsim::{
    CarGeometry, CarModel, FrictionCircle, GenericAeroModel, GenericTyreModel, LinearCar,
    LinearTyre, QuadraticAero, TyreModel,
};

/// Geometry used by the reference load transfer figures.
pub fn create_test_geometry() -> CarGeometry {
    CarGeometry::new(2.5, 1.2, 0.4, 0.3)
}

/// 1200 kg road car on linear tyres and constant-coefficient aero.
pub fn create_test_car() -> LinearCar {
    CarModel::new(
        1200.0,
        LinearTyre::new(10.0, 12.0, FrictionCircle::new(1.0)),
        QuadraticAero::default(),
        create_test_geometry(),
    )
}

/// Tyre built from closures that mirror `LinearTyre::default()`.
pub fn create_closure_tyre() -> impl TyreModel {
    GenericTyreModel::new(
        |slip_angle: f64, normal_load: f64| 10.0 * normal_load * slip_angle,
        |slip_ratio: f64, normal_load: f64| 12.0 * normal_load * slip_ratio,
        FrictionCircle::new(1.0),
    )
}

/// Car whose collaborators are all built from closures.
pub fn create_closure_car(
) -> CarModel<impl TyreModel, GenericAeroModel<fn(f64) -> f64, fn(f64) -> f64>> {
    let downforce: fn(f64) -> f64 = |v| 0.5 * 1.25 * 4.3 * v * v;
    let drag: fn(f64) -> f64 = |v| 0.5 * 1.25 * 1.7 * v * v;
    CarModel::new(
        1200.0,
        create_closure_tyre(),
        GenericAeroModel::new(downforce, drag),
        create_test_geometry(),
    )
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
name: RoadCar
mass: 1200.0
wheelbase: 2.5
track_width: 1.2
cog_height: 0.4
front_weight_dist: 0.3
cl_a: 4.3
cd_a: 1.7
rho: 1.25
lateral_stiffness: 10.0
longitudinal_stiffness: 12.0
mu: 1.0
"#;
