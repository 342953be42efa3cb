//! Spiral placement engine.
//!
//! Tags are placed one at a time in sequence order. Each tag walks the
//! [`Spiral`] of its sequence index and takes the first probe whose box keeps
//! the required clearance from every tag placed before it. A tag that exhausts
//! its probe budget is reported as [`SpiralOutcome::Exhausted`] and does not
//! block later tags.
//!
//! Spiral indices belong to the sequence, not to the set of boxes that are
//! actually placed: a tag left out before or during placement keeps its
//! index, and the tags after it walk the same spirals they would otherwise.

use log::{debug, trace, warn};

use tagcloud_core::geometry::{Bounds, Point, Size};

use crate::{
    config::LayoutConfig,
    layout::spiral::{Probe, Spiral},
};

/// An accepted placement: a box centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRecord {
    center: Point,
    size: Size,
}

impl PlacementRecord {
    pub fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the placed box.
    pub fn bounds(&self) -> Bounds {
        self.center.to_bounds(self.size)
    }
}

/// Returns `true` when two boxes are closer than `spacing` on both axes.
///
/// Boxes collide only if the horizontal gap and the vertical gap are both
/// smaller than the required clearance; separation on either axis is enough.
///
/// # Examples
///
/// ```
/// # use tagcloud::layout::{PlacementRecord, collides};
/// # use tagcloud_core::geometry::{Point, Size};
/// let a = PlacementRecord::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
/// let touching = PlacementRecord::new(Point::new(10.0, 3.0), Size::new(10.0, 10.0));
///
/// assert!(!collides(&a, &touching, 0.0));
/// assert!(collides(&a, &touching, 1.0));
/// ```
pub fn collides(a: &PlacementRecord, b: &PlacementRecord, spacing: f32) -> bool {
    let delta = a.center.sub_point(b.center).abs();
    let clear_x = (a.size.width() + b.size.width()) / 2.0 + spacing;
    let clear_y = (a.size.height() + b.size.height()) / 2.0 + spacing;
    delta.x() < clear_x && delta.y() < clear_y
}

/// The result of one tag's spiral search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpiralOutcome {
    /// A free position was found at `probe`.
    Placed(Probe),
    /// Every one of `probes` candidates collided.
    Exhausted { probes: usize },
}

impl SpiralOutcome {
    /// Returns the accepted probe, if the tag was placed.
    pub fn probe(&self) -> Option<Probe> {
        match self {
            Self::Placed(probe) => Some(*probe),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Places boxes along per-tag spirals without overlap.
#[derive(Debug, Clone)]
pub struct SpiralEngine {
    spacing: f32,
    seed: f32,
    max_probes: usize,
}

impl SpiralEngine {
    /// Creates an engine from the layout section of the configuration.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            spacing: config.spacing(),
            seed: config.seed(),
            max_probes: config.max_probes(),
        }
    }

    /// Places boxes of `sizes` in order, one outcome per size.
    ///
    /// The box at position `i` walks spiral `i`.
    pub fn place(&self, sizes: &[Size]) -> Vec<SpiralOutcome> {
        self.place_with(sizes.iter().copied().enumerate(), |_, _| {})
    }

    /// Places `(spiral index, size)` boxes in order, one outcome per box,
    /// reporting every probe.
    ///
    /// Spiral indices must be ascending; gaps mark tags left out of
    /// placement. An exhausted box keeps its index as well, so every box
    /// walks the spiral of its sequence position whatever happened to the
    /// boxes before it.
    ///
    /// `on_probe` receives the position of the box in `boxes` and each
    /// candidate examined, accepted or not. The trace is meant for external
    /// visualization.
    pub fn place_with<I, F>(&self, boxes: I, mut on_probe: F) -> Vec<SpiralOutcome>
    where
        I: IntoIterator<Item = (usize, Size)>,
        F: FnMut(usize, &Probe),
    {
        let mut placed: Vec<PlacementRecord> = Vec::new();
        let mut outcomes = Vec::new();

        for (position, (index, size)) in boxes.into_iter().enumerate() {
            let spiral = Spiral::for_index(index, self.seed, Point::default());
            let mut accepted = None;

            for probe in spiral.take(self.max_probes) {
                on_probe(position, &probe);
                let candidate = PlacementRecord::new(probe.point, size);
                if !placed
                    .iter()
                    .any(|other| collides(&candidate, other, self.spacing))
                {
                    accepted = Some((probe, candidate));
                    break;
                }
            }

            match accepted {
                Some((probe, record)) => {
                    trace!(index, step = probe.step, radius = probe.radius; "Box placed");
                    placed.push(record);
                    outcomes.push(SpiralOutcome::Placed(probe));
                }
                None => {
                    warn!(index, probes = self.max_probes; "Spiral search exhausted");
                    outcomes.push(SpiralOutcome::Exhausted {
                        probes: self.max_probes,
                    });
                }
            }
        }

        debug!(boxes = outcomes.len(), placed = placed.len(); "Placement finished");
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::layout::GOLDEN_ANGLE_DEGREES;

    fn engine(spacing: f32) -> SpiralEngine {
        SpiralEngine::new(&LayoutConfig::default().with_spacing(spacing))
    }

    fn records(sizes: &[Size], outcomes: &[SpiralOutcome]) -> Vec<PlacementRecord> {
        sizes
            .iter()
            .zip(outcomes)
            .filter_map(|(size, outcome)| {
                outcome
                    .probe()
                    .map(|probe| PlacementRecord::new(probe.point, *size))
            })
            .collect()
    }

    #[test]
    fn test_collision_requires_overlap_on_both_axes() {
        let a = PlacementRecord::new(Point::new(0.0, 0.0), Size::new(10.0, 4.0));

        let overlapping = PlacementRecord::new(Point::new(5.0, 1.0), Size::new(10.0, 4.0));
        assert!(collides(&a, &overlapping, 0.0));

        // Overlaps horizontally but is clear vertically
        let below = PlacementRecord::new(Point::new(2.0, 4.0), Size::new(10.0, 4.0));
        assert!(!collides(&a, &below, 0.0));
        assert!(collides(&a, &below, 0.5));

        // Overlaps vertically but is clear horizontally
        let beside = PlacementRecord::new(Point::new(12.0, 0.0), Size::new(10.0, 4.0));
        assert!(!collides(&a, &beside, 2.0));
        assert!(collides(&a, &beside, 2.1));
    }

    #[test]
    fn test_single_box_takes_step_zero() {
        let outcomes = engine(4.0).place(&[Size::new(30.0, 12.0)]);
        let probe = outcomes[0].probe().unwrap();
        assert_eq!(probe.step, 0);
        assert_eq!(probe.radius, 0.0);
        assert!(probe.point.is_zero());
    }

    #[test]
    fn test_two_identical_boxes_take_first_clear_slot() {
        let size = Size::new(10.0, 10.0);
        let outcomes = engine(0.0).place(&[size, size]);

        let second = outcomes[1].probe().unwrap();
        let (sin, cos) = GOLDEN_ANGLE_DEGREES.to_radians().sin_cos();

        // Along 137.508 degrees the x gap reaches 10 first: r * |cos| >= 10 at
        // r = 14.0 (step 23), while r = 13.5 still overlaps
        assert_eq!(second.step, 23);
        assert_approx_eq!(f32, second.radius, 14.0);
        assert_approx_eq!(f32, second.point.x(), 14.0 * cos, epsilon = 1e-4);
        assert_approx_eq!(f32, second.point.y(), 14.0 * sin, epsilon = 1e-4);
        assert!(second.point.x().abs() >= 10.0);
        assert!(second.point.y().abs() < 10.0);
    }

    #[test]
    fn test_exhausted_box_does_not_block_later_boxes() {
        let config = LayoutConfig::default().with_spacing(0.0).with_max_probes(3);
        let outcomes = SpiralEngine::new(&config).place(&[
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
            Size::new(1.0, 1.0),
        ]);

        assert!(matches!(outcomes[0], SpiralOutcome::Placed(_)));
        assert_eq!(outcomes[1], SpiralOutcome::Exhausted { probes: 3 });
        // Index 2 starts at radius 2.5 * sqrt(2), still inside the first box
        assert_eq!(outcomes[2], SpiralOutcome::Exhausted { probes: 3 });
    }

    #[test]
    fn test_observer_sees_every_probe_in_order() {
        let size = Size::new(10.0, 10.0);
        let mut trace: Vec<(usize, Probe)> = Vec::new();
        let outcomes = engine(0.0).place_with([(0, size), (1, size)], |position, probe| {
            trace.push((position, *probe));
        });

        // One probe for the first box, 24 for the second
        assert_eq!(trace.len(), 1 + 24);
        assert_eq!(trace.last().unwrap().1, outcomes[1].probe().unwrap());
        for pair in trace.windows(2).filter(|pair| pair[0].0 == pair[1].0) {
            assert!(pair[1].1.radius >= pair[0].1.radius);
        }
    }

    #[test]
    fn test_boxes_walk_the_spiral_of_their_sequence_index() {
        let size = Size::new(2.0, 2.0);
        let outcomes = engine(0.0).place_with([(0, size), (3, size)], |_, _| {});

        // Index 3 starts at radius 2.5 * sqrt(3), clear of the first box
        let second = outcomes[1].probe().unwrap();
        let expected = Spiral::for_index(3, 0.0, Point::default()).probe_at(0);
        assert_eq!(second.step, 0);
        assert_eq!(second, expected);
        assert_approx_eq!(f32, second.radius, 2.5 * 3.0f32.sqrt());
    }

    #[test]
    fn test_exhausted_box_keeps_its_index_for_later_boxes() {
        let config = LayoutConfig::default().with_spacing(0.0).with_max_probes(3);
        let engine = SpiralEngine::new(&config);
        let small = Size::new(2.0, 2.0);
        let huge = Size::new(100.0, 100.0);
        let tiny = Size::new(1.0, 1.0);

        let with_gap = engine.place_with([(0, small), (2, tiny)], |_, _| {});
        let with_exhausted =
            engine.place_with([(0, small), (1, huge), (2, tiny)], |_, _| {});

        assert_eq!(with_exhausted[1], SpiralOutcome::Exhausted { probes: 3 });
        assert_eq!(with_gap[1], with_exhausted[2]);
        assert_eq!(with_gap[1].probe().map(|probe| probe.step), Some(0));
    }

    fn sizes_strategy() -> impl Strategy<Value = Vec<Size>> {
        prop::collection::vec(
            (1.0f32..40.0, 1.0f32..20.0).prop_map(|(w, h)| Size::new(w, h)),
            1..25,
        )
    }

    proptest! {
        #[test]
        fn placed_boxes_never_overlap(sizes in sizes_strategy(), spacing in 0.0f32..6.0) {
            let outcomes = engine(spacing).place(&sizes);
            let placed = records(&sizes, &outcomes);
            prop_assert_eq!(placed.len(), sizes.len());

            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    let delta = a.center().sub_point(b.center()).abs();
                    let clear_x = (a.size().width() + b.size().width()) / 2.0 + spacing;
                    let clear_y = (a.size().height() + b.size().height()) / 2.0 + spacing;
                    prop_assert!(delta.x() >= clear_x || delta.y() >= clear_y);
                }
            }
        }

        #[test]
        fn placement_is_deterministic(sizes in sizes_strategy(), seed in -180.0f32..180.0) {
            let engine = SpiralEngine::new(&LayoutConfig::default().with_seed(seed));
            prop_assert_eq!(engine.place(&sizes), engine.place(&sizes));
        }
    }
}
