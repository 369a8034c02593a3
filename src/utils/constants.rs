pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const AIR_DENSITY: f64 = 1.25; // kg/m^3, default for aero models
