use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Path curvature (1/m) of a turn with the given radius (m).
#[inline]
pub fn curvature_from_radius(radius: f64) -> f64 {
    radius.recip()
}
