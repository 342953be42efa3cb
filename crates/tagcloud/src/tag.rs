//! Tag records carried through a layout pass.
//!
//! - [`TagInput`] - A raw `(label, weight)` pair supplied by the caller
//! - [`Tag`] - A validated tag in sequence order
//! - [`PlacedTag`] - A tag with its final style, size and position
//! - [`SkippedTag`] - A tag excluded from the pass, with the [`SkipReason`]

use serde::Deserialize;
use thiserror::Error;

use tagcloud_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

/// A raw tag as supplied by the caller.
///
/// The weight is optional so that incomplete input can be reported instead of
/// rejected wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagInput {
    label: String,
    #[serde(default)]
    weight: Option<f32>,
}

impl TagInput {
    /// Creates a tag input with a weight.
    pub fn new(label: impl Into<String>, weight: f32) -> Self {
        Self {
            label: label.into(),
            weight: Some(weight),
        }
    }

    /// Creates a tag input that carries no weight.
    pub fn without_weight(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            weight: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> Option<f32> {
        self.weight
    }
}

/// A validated tag with a usable weight and its label hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    label: String,
    weight: f32,
    hash: i32,
}

impl Tag {
    pub(crate) fn new(label: String, weight: f32, hash: i32) -> Self {
        Self {
            label,
            weight,
            hash,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the label hash used for tie-breaking and hue selection.
    pub fn hash(&self) -> i32 {
        self.hash
    }
}

/// Why a tag was left out of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SkipReason {
    #[error("tag has no weight")]
    MissingWeight,

    #[error("tag weight {0} is not a non-negative number")]
    InvalidWeight(f32),

    #[error("measured size {}x{} is degenerate", .0.width(), .0.height())]
    DegenerateMeasurement(Size),

    #[error("no free position found after {probes} probes")]
    UnboundedSearch { probes: usize },
}

/// A tag excluded from the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTag {
    label: String,
    reason: SkipReason,
}

impl SkippedTag {
    pub(crate) fn new(label: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            label: label.into(),
            reason,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn reason(&self) -> SkipReason {
        self.reason
    }
}

/// A tag with its final style and position.
///
/// Coordinates are in content space: the top-left corner of the content
/// bounding box is the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTag {
    label: String,
    weight: f32,
    font_size: f32,
    color: Color,
    bounds: Bounds,
    probes: usize,
}

impl PlacedTag {
    pub(crate) fn new(
        tag: Tag,
        font_size: f32,
        color: Color,
        bounds: Bounds,
        probes: usize,
    ) -> Self {
        Self {
            label: tag.label,
            weight: tag.weight,
            font_size,
            color,
            bounds,
            probes,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the x-coordinate of the tag's top-left corner.
    pub fn x(&self) -> f32 {
        self.bounds.min_x()
    }

    /// Returns the y-coordinate of the tag's top-left corner.
    pub fn y(&self) -> f32 {
        self.bounds.min_y()
    }

    /// Returns the tag's width, including item padding.
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    /// Returns the tag's height, including item padding.
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the number of spiral probes it took to find this tag's slot.
    pub fn probes(&self) -> usize {
        self.probes
    }
}
