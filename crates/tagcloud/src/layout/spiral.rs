//! Outward probe sequence for a single tag.
//!
//! Tag `i` searches along a fixed direction, `i * GOLDEN_ANGLE_DEGREES + seed`,
//! starting at radius `2.5 * sqrt(i)` and stepping outward by `0.5` per probe.
//! Successive tags are spread by the golden angle so early, heavy tags fan out
//! around the center instead of lining up.

use tagcloud_core::geometry::Point;

/// The golden angle in degrees.
pub const GOLDEN_ANGLE_DEGREES: f32 = 137.508;

/// Starting radius per `sqrt(index)`.
const START_RADIUS_FACTOR: f32 = 2.5;

/// Radius increment per probe.
const RADIUS_STEP: f32 = 0.5;

/// A single candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// Zero-based probe number within the tag's spiral.
    pub step: usize,
    /// Distance of the candidate from the spiral center.
    pub radius: f32,
    /// Candidate center point.
    pub point: Point,
}

/// The probe sequence of one tag.
///
/// `Spiral` is an unbounded [`Iterator`]; callers bound it with
/// [`Iterator::take`]. A clone resumes from the same step as the original.
///
/// # Examples
///
/// ```
/// # use tagcloud::layout::Spiral;
/// # use tagcloud_core::geometry::Point;
/// let radii: Vec<f32> = Spiral::for_index(4, 0.0, Point::default())
///     .take(3)
///     .map(|probe| probe.radius)
///     .collect();
/// assert_eq!(radii, [5.0, 5.5, 6.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Spiral {
    center: Point,
    start_radius: f32,
    radians: f32,
    step: usize,
}

impl Spiral {
    /// Creates the spiral of the tag at sequence `index`.
    ///
    /// # Arguments
    ///
    /// * `index` - The tag's zero-based position in placement order.
    /// * `seed` - Angle offset in degrees shared by all tags of a pass.
    /// * `center` - The point the spiral radiates from.
    pub fn for_index(index: usize, seed: f32, center: Point) -> Self {
        Self {
            center,
            start_radius: START_RADIUS_FACTOR * (index as f32).sqrt(),
            radians: direction_degrees(index, seed).to_radians(),
            step: 0,
        }
    }

    /// Returns the radius probed at `step`.
    pub fn radius_at(&self, step: usize) -> f32 {
        self.start_radius + RADIUS_STEP * step as f32
    }

    /// Returns the probe at `step` without advancing the spiral.
    pub fn probe_at(&self, step: usize) -> Probe {
        let radius = self.radius_at(step);
        Probe {
            step,
            radius,
            point: self
                .center
                .add_point(Point::from_polar(radius, self.radians)),
        }
    }
}

impl Iterator for Spiral {
    type Item = Probe;

    fn next(&mut self) -> Option<Probe> {
        let probe = self.probe_at(self.step);
        self.step += 1;
        Some(probe)
    }
}

/// Returns the search direction of tag `index` in degrees, reduced to `[0, 360)`.
///
/// The product is formed in `f64` so that large indices keep their angular
/// precision.
pub fn direction_degrees(index: usize, seed: f32) -> f32 {
    let degrees = index as f64 * f64::from(GOLDEN_ANGLE_DEGREES) + f64::from(seed);
    degrees.rem_euclid(360.0) as f32
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_tag_starts_at_center() {
        let probe = Spiral::for_index(0, 0.0, Point::new(3.0, 4.0))
            .next()
            .unwrap();
        assert_eq!(probe.step, 0);
        assert_eq!(probe.radius, 0.0);
        assert_eq!(probe.point, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_start_radius_scales_with_sqrt_index() {
        let spiral = Spiral::for_index(9, 0.0, Point::default());
        assert_approx_eq!(f32, spiral.radius_at(0), 7.5);
        assert_approx_eq!(f32, spiral.radius_at(4), 9.5);
    }

    #[test]
    fn test_direction_uses_golden_angle() {
        assert_approx_eq!(f32, direction_degrees(0, 0.0), 0.0);
        assert_approx_eq!(f32, direction_degrees(1, 0.0), 137.508, epsilon = 1e-4);
        assert_approx_eq!(f32, direction_degrees(3, 0.0), 52.524, epsilon = 1e-3);
        assert_approx_eq!(f32, direction_degrees(1, 10.0), 147.508, epsilon = 1e-4);
        assert_approx_eq!(f32, direction_degrees(0, -90.0), 270.0);
    }

    #[test]
    fn test_direction_is_constant_along_spiral() {
        let mut spiral = Spiral::for_index(5, 12.0, Point::default());
        let first = spiral.nth(1).unwrap();
        let later = spiral.nth(10).unwrap();

        let first_angle = first.point.y().atan2(first.point.x());
        let later_angle = later.point.y().atan2(later.point.x());
        assert_approx_eq!(f32, first_angle, later_angle, epsilon = 1e-4);
        assert!(later.radius > first.radius);
    }

    #[test]
    fn test_probe_at_matches_iteration() {
        let spiral = Spiral::for_index(7, 3.0, Point::new(1.0, 1.0));
        let iterated: Vec<Probe> = spiral.clone().take(5).collect();
        let direct: Vec<Probe> = (0..5).map(|step| spiral.probe_at(step)).collect();
        assert_eq!(iterated, direct);
    }

    proptest! {
        #[test]
        fn radius_never_shrinks(index in 0usize..500, seed in -360.0f32..360.0) {
            let radii: Vec<f32> = Spiral::for_index(index, seed, Point::default())
                .take(200)
                .map(|probe| probe.radius)
                .collect();
            for pair in radii.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
        }
    }
}
