// src/layout/bohr.rs
//
// Orbit and electron placement for a Bohr-model drawing. Coordinates are
// relative to the nucleus, in the same units as `max_orbit_radius`.

use crate::model::electrons::SHELL_CAPACITY;
use crate::model::ElementRecord;
use crate::utils::geometry::{even_angles, polar_to_cartesian, Point2};

/// Ring spacing as multiples of `max_orbit_radius / 14`; widens outward.
const SPACING: [f64; 7] = [1.8, 3.2, 4.8, 6.6, 8.6, 10.8, 13.2];

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub index: usize,
    pub radius: f64,
    pub electrons: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElectronPosition {
    pub ring: usize,
    pub index: usize,
    pub position: Point2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BohrLayout {
    pub max_orbit_radius: f64,
    pub rings: Vec<Ring>,
    pub electrons: Vec<ElectronPosition>,
}

impl BohrLayout {
    /// Every one of the seven rings is emitted, occupied or not, so diagrams
    /// of different elements share the same scale.
    pub fn compute(shells: &[u32], max_orbit_radius: f64) -> Self {
        let mut rings = Vec::with_capacity(SPACING.len());
        let mut electrons = Vec::new();

        for (i, &capacity) in SHELL_CAPACITY.iter().enumerate() {
            let radius = orbit_radius(i, max_orbit_radius);
            let count = shells.get(i).copied().unwrap_or(0).min(capacity);

            for (j, angle) in even_angles(count as usize).into_iter().enumerate() {
                electrons.push(ElectronPosition {
                    ring: i,
                    index: j,
                    position: polar_to_cartesian(radius, angle),
                });
            }

            rings.push(Ring {
                index: i,
                radius,
                electrons: count,
            });
        }

        Self {
            max_orbit_radius,
            rings,
            electrons,
        }
    }

    pub fn for_element(element: &ElementRecord, max_orbit_radius: f64) -> Self {
        Self::compute(&element.shells(), max_orbit_radius)
    }

    pub fn occupied_rings(&self) -> impl Iterator<Item = &Ring> {
        self.rings.iter().filter(|r| r.electrons > 0)
    }
}

pub fn orbit_radius(ring: usize, max_orbit_radius: f64) -> f64 {
    let base = max_orbit_radius / 14.0;
    base * SPACING[ring.min(SPACING.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::utils::geometry::calculate_distance;

    #[test]
    fn test_rings_are_fixed_and_increasing() {
        let layout = BohrLayout::compute(&[1], 160.0);
        assert_eq!(layout.rings.len(), 7);
        assert!(layout.rings.windows(2).all(|w| w[0].radius < w[1].radius));
        assert!((layout.rings[6].radius - 160.0 / 14.0 * 13.2).abs() < 1e-9);
        assert_eq!(layout.occupied_rings().count(), 1);
    }

    #[test]
    fn test_electrons_sit_on_their_ring() {
        let sodium = ElementRecord::new(11, "Na", "Sodium", 22.99, Category::AlkaliMetal);
        let layout = BohrLayout::for_element(&sodium, 160.0);
        assert_eq!(layout.electrons.len(), 11);
        for e in &layout.electrons {
            let r = layout.rings[e.ring].radius;
            assert!((calculate_distance(e.position, [0.0, 0.0]) - r).abs() < 1e-9);
        }
        let per_ring: Vec<u32> = layout.occupied_rings().map(|r| r.electrons).collect();
        assert_eq!(per_ring, vec![2, 8, 1]);
    }

    #[test]
    fn test_first_electron_starts_at_zero_angle() {
        let layout = BohrLayout::compute(&[2], 140.0);
        let first = &layout.electrons[0];
        assert!((first.position[0] - orbit_radius(0, 140.0)).abs() < 1e-9);
        assert!(first.position[1].abs() < 1e-9);
        // second electron opposite the first
        assert!((layout.electrons[1].position[0] + orbit_radius(0, 140.0)).abs() < 1e-9);
    }

    #[test]
    fn test_overfull_shell_is_clamped() {
        let layout = BohrLayout::compute(&[5, 8], 100.0);
        assert_eq!(layout.rings[0].electrons, 2);
        assert_eq!(layout.electrons.len(), 10);
    }
}
