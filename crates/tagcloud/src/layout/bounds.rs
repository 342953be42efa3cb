//! Content bounds and viewport fitting.
//!
//! After placement the layout is centered on the spiral origin. [`normalize`]
//! computes the tight bounding box of every tag's margin box and moves the
//! layout so that box starts at the origin. [`fit_to_viewport`] then computes
//! the uniform scale, and the centering offset, that fits the content into a
//! target viewport.

use tagcloud_core::geometry::{Bounds, Insets, Point, Size};

use crate::layout::placement::PlacementRecord;

/// Placements moved into content space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// Tag boxes in input order, relative to the content origin.
    pub bounds: Vec<Bounds>,
    /// Extent of the content bounding box.
    pub content_size: Size,
}

/// Computes the bounding box of `records`, each grown by half of `spacing`
/// on every side.
///
/// Half the clearance belongs to each neighbor, so the margin boxes of
/// adjacent tags meet without overlapping. Returns `None` for no records.
pub fn content_bounds(records: &[PlacementRecord], spacing: f32) -> Option<Bounds> {
    let margin = Insets::uniform(spacing / 2.0);
    records
        .iter()
        .map(|record| record.bounds().add_padding(margin))
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// Moves `records` so the content bounding box starts at the origin.
///
/// # Examples
///
/// ```
/// # use tagcloud::layout::{PlacementRecord, normalize};
/// # use tagcloud_core::geometry::{Point, Size};
/// let records = [PlacementRecord::new(Point::new(-3.0, 7.0), Size::new(20.0, 10.0))];
/// let normalized = normalize(&records, 4.0);
///
/// assert_eq!(normalized.content_size, Size::new(24.0, 14.0));
/// assert_eq!(normalized.bounds[0].min_point(), Point::new(2.0, 2.0));
/// ```
pub fn normalize(records: &[PlacementRecord], spacing: f32) -> Normalized {
    let Some(content) = content_bounds(records, spacing) else {
        return Normalized::default();
    };

    let origin = content.min_point();
    Normalized {
        bounds: records
            .iter()
            .map(|record| record.bounds().inverse_translate(origin))
            .collect(),
        content_size: content.to_size(),
    }
}

/// A uniform scale and offset that fits content into a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    scale: f32,
    offset: Point,
}

impl Fit {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Point::default(),
        }
    }

    /// Returns the uniform scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the offset that centers the scaled content in the viewport.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Maps content-space bounds into viewport space.
    pub fn apply(&self, bounds: Bounds) -> Bounds {
        bounds.scale(self.scale).translate(self.offset)
    }
}

impl Default for Fit {
    fn default() -> Self {
        Self::identity()
    }
}

/// Computes the fit of `content` into `viewport`.
///
/// The scale is the smaller of the two axis ratios, so the content keeps its
/// aspect ratio. An axis along which the content has no extent places no
/// constraint; content with no extent at all keeps a scale of one.
///
/// # Examples
///
/// ```
/// # use tagcloud::layout::fit_to_viewport;
/// # use tagcloud_core::geometry::Size;
/// let fit = fit_to_viewport(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
/// assert_eq!(fit.scale(), 0.5);
/// assert_eq!(fit.offset().x(), 0.0);
/// assert_eq!(fit.offset().y(), 25.0);
/// ```
pub fn fit_to_viewport(content: Size, viewport: Size) -> Fit {
    let ratios = [
        (viewport.width(), content.width()),
        (viewport.height(), content.height()),
    ];
    let scale = ratios
        .into_iter()
        .filter(|&(_, extent)| extent > 0.0)
        .map(|(target, extent)| target / extent)
        .reduce(f32::min)
        .unwrap_or(1.0);

    let scaled = content.scale(scale);
    Fit {
        scale,
        offset: Point::new(
            (viewport.width() - scaled.width()) / 2.0,
            (viewport.height() - scaled.height()) / 2.0,
        ),
    }
}
