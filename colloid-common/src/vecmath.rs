use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A simple 3D vector struct, in reduced (Bjerrum-length) units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Creates a zero vector (the box centre).
    pub fn zero() -> Self {
        Vec3 { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Calculates the squared length (magnitude) of the vector.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Maps a displacement onto its nearest periodic image in a cubic box of
    /// edge `box_length`: each component becomes `d - L * round(d / L)`.
    pub fn minimum_image(&self, box_length: f64) -> Self {
        let wrap = |d: f64| d - box_length * (d / box_length).round();
        Vec3 { x: wrap(self.x), y: wrap(self.y), z: wrap(self.z) }
    }

    /// Squared distance to `other` under the minimum-image convention.
    pub fn periodic_distance_squared(&self, other: Vec3, box_length: f64) -> f64 {
        (*self - other).minimum_image(box_length).length_squared()
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_image_wraps_across_faces() {
        let d = Vec3::new(9.0, -9.0, 4.0).minimum_image(10.0);
        assert!((d.x - -1.0).abs() < 1e-12);
        assert!((d.y - 1.0).abs() < 1e-12);
        assert!((d.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn periodic_distance_sees_neighbour_across_boundary() {
        let a = Vec3::new(4.9, 0.0, 0.0);
        let b = Vec3::new(-4.9, 0.0, 0.0);
        assert!((a.periodic_distance_squared(b, 10.0).sqrt() - 0.2).abs() < 1e-9);
        assert!(((a - b).length_squared().sqrt() - 9.8).abs() < 1e-9);
    }

    #[test]
    fn minimum_image_components_stay_within_half_box() {
        let box_length = 3.5;
        for &(x, y, z) in &[(10.0, -7.3, 1.74), (-0.2, 100.1, -52.0)] {
            let d = Vec3::new(x, y, z).minimum_image(box_length);
            for c in [d.x, d.y, d.z] {
                assert!(c.abs() <= box_length / 2.0 + 1e-12);
            }
        }
    }
}
