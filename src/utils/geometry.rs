// src/utils/geometry.rs

use nalgebra::{Rotation2, Vector2};
use std::f64::consts::PI;

type Point2 = (f64, f64);

/// Tilt shared by every orbit ellipse and every electron on it.
pub const ORBIT_ROTATION: f64 = PI * 0.75;

/// pi * (3 - sqrt 5), roughly 137.5 degrees
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Parametric ellipse point (axis aligned, centered on the origin)
pub fn ellipse_point(rx: f64, ry: f64, angle: f64) -> Point2 {
    (rx * angle.cos(), ry * angle.sin())
}

/// Rotates a point around the origin by `rotation` radians
pub fn rotate(x0: f64, y0: f64, rotation: f64) -> Point2 {
    let v = Rotation2::new(rotation) * Vector2::new(x0, y0);
    (v.x, v.y)
}

/// Point on a rotated ellipse, relative to the ellipse center.
pub fn orbit_point(rx: f64, ry: f64, angle: f64) -> Point2 {
    let (x0, y0) = ellipse_point(rx, ry, angle);
    rotate(x0, y0, ORBIT_ROTATION)
}

/// Sunflower packing: returns (angle, radius) of the `index`-th seed.
pub fn spiral_point(index: usize, radius_scale: f64) -> Point2 {
    let i = index as f64;
    (i * golden_angle(), radius_scale * i.sqrt())
}

/// Polar (angle, radius) to cartesian, offset by `center`
pub fn polar_offset(center: Point2, angle: f64, radius: f64) -> Point2 {
    (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
}
