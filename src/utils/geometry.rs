// src/utils/geometry.rs

use std::f64::consts::TAU;

pub type Point2 = [f64; 2];

/// Point on a circle of `radius` around the origin, angle in radians.
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point2 {
    [radius * angle.cos(), radius * angle.sin()]
}

/// Angles of `count` points spread evenly around a circle, starting at 0.
pub fn even_angles(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Distance between two points
pub fn calculate_distance(p1: Point2, p2: Point2) -> f64 {
    let dx = p1[0] - p2[0];
    let dy = p1[1] - p2[1];
    (dx * dx + dy * dy).sqrt()
}
