//! Closed-form photographic optics
//!
//! All lengths are in millimeters, angles in degrees, and areas in square
//! millimeters. Every function is pure.
//!
//! References:
//! - http://www.uscoles.com/fstop.htm
//! - https://www.scantips.com/lights/fieldofviewmath.html

use std::f32::consts::PI;
use glam::Vec2;

/// Relative tolerance used by [`approximately_equal`]
pub const APPROXIMATE_EPSILON: f32 = 1e-5;

/// Compare two values with a relative tolerance
///
/// Setters use this to ignore writes that do not change anything, so that a
/// host echoing a side effect back as a fresh write does not trigger another
/// dolly move or exposure rebalance.
pub fn approximately_equal(a: f32, b: f32) -> bool {
    let tolerance = (APPROXIMATE_EPSILON * a.abs().max(b.abs())).max(f32::EPSILON * 8.0);
    (b - a).abs() < tolerance
}

/// Finite and strictly positive
pub fn is_valid_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Physical aperture diameter for a focal length and f/stop
pub fn aperture_diameter(focal_length: f32, f_stop: f32) -> f32 {
    focal_length / f_stop
}

/// f/stop giving the requested aperture diameter at this focal length
pub fn f_stop_for_diameter(focal_length: f32, diameter: f32) -> f32 {
    focal_length / diameter
}

/// Area of a circular aperture of the given diameter
pub fn aperture_area(diameter: f32) -> f32 {
    (diameter / 2.0).powi(2) * PI
}

/// Diameter of a circular aperture of the given area
///
/// Exact inverse of [`aperture_area`].
pub fn aperture_diameter_from_area(area: f32) -> f32 {
    (area / PI).sqrt() * 2.0
}

/// Field of view spanned by one sensor dimension
pub fn field_of_view_deg(sensor_dimension: f32, focal_length: f32) -> f32 {
    (2.0 * sensor_dimension.atan2(2.0 * focal_length)).to_degrees()
}

/// Focal length giving the requested horizontal field of view
pub fn focal_length_for_fov(sensor_width: f32, fov_deg: f32) -> f32 {
    (sensor_width / 2.0) / (fov_deg.to_radians() / 2.0).tan()
}

/// Diagonal length of the sensor
pub fn sensor_diagonal(sensor_size: Vec2) -> f32 {
    sensor_size.length()
}

#[cfg(test)]
#[path = "optics_tests.rs"]
mod tests;
