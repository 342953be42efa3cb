//! Weight-driven font size and color assignment.
//!
//! Every tag's weight is normalized against the weight range of the whole
//! pass, then mapped linearly onto the configured font size and lightness
//! ranges. The hue comes from the label hash, so a label keeps its hue no
//! matter what else is in the cloud.
//!
//! Because the weight range is derived from the full tag set, adding or
//! removing one tag can shift the size and lightness of every other tag.

use log::trace;

use tagcloud_core::color::Color;

use crate::{CloudError, config::StyleConfig, tag::Tag};

/// Normalized weight assigned to every tag when all weights are equal.
const COLLAPSED_RANGE_NORMALIZED: f32 = 0.5;

/// The minimum and maximum weight of a tag set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    min: f32,
    max: f32,
}

impl WeightRange {
    /// Computes the range of `weights`, or `None` when there are none.
    pub fn from_weights(weights: impl IntoIterator<Item = f32>) -> Option<Self> {
        weights.into_iter().fold(None, |range, weight| {
            Some(match range {
                None => Self {
                    min: weight,
                    max: weight,
                },
                Some(Self { min, max }) => Self {
                    min: min.min(weight),
                    max: max.max(weight),
                },
            })
        })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Rescales `weight` into `[0, 1]` relative to this range.
    ///
    /// A range with no extent maps every weight to the midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tagcloud::style::WeightRange;
    /// let range = WeightRange::from_weights([5.0, 10.0]).unwrap();
    /// assert_eq!(range.normalize(5.0), 0.0);
    /// assert_eq!(range.normalize(7.5), 0.5);
    /// assert_eq!(range.normalize(10.0), 1.0);
    ///
    /// let flat = WeightRange::from_weights([3.0, 3.0]).unwrap();
    /// assert_eq!(flat.normalize(3.0), 0.5);
    /// ```
    pub fn normalize(&self, weight: f32) -> f32 {
        let span = self.max - self.min;
        if span > 0.0 {
            ((weight - self.min) / span).clamp(0.0, 1.0)
        } else {
            COLLAPSED_RANGE_NORMALIZED
        }
    }
}

/// The computed style of one tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagStyle {
    normalized: f32,
    font_size: f32,
    color: Color,
}

impl TagStyle {
    /// Returns the tag's weight rescaled into `[0, 1]`.
    pub fn normalized(&self) -> f32 {
        self.normalized
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A tag paired with its computed style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledTag {
    pub tag: Tag,
    pub style: TagStyle,
}

/// Maps weights to font sizes and colors for one layout pass.
#[derive(Debug, Clone)]
pub struct StyleMapper<'a> {
    config: &'a StyleConfig,
    range: WeightRange,
}

impl<'a> StyleMapper<'a> {
    /// Creates a mapper for `tags`, deriving the weight range from them.
    ///
    /// Returns `None` when `tags` is empty.
    pub fn new(config: &'a StyleConfig, tags: &[Tag]) -> Option<Self> {
        let range = WeightRange::from_weights(tags.iter().map(Tag::weight))?;
        Some(Self::with_range(config, range))
    }

    /// Creates a mapper with an explicit weight range.
    pub fn with_range(config: &'a StyleConfig, range: WeightRange) -> Self {
        Self { config, range }
    }

    pub fn range(&self) -> WeightRange {
        self.range
    }

    /// Computes the style of a single tag.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::Style`] if the color cannot be constructed.
    pub fn style(&self, tag: &Tag) -> Result<TagStyle, CloudError> {
        let normalized = self.range.normalize(tag.weight());

        let (min_font, max_font) = self.config.font_size_range();
        let font_size = lerp(min_font, max_font, normalized);

        let (min_light, max_light) = self.config.lightness_range();
        let lightness = lerp(min_light, max_light, normalized);
        let hue = hue_for_hash(tag.hash());

        let color = Color::hsl(hue, self.config.color_saturation(), lightness)
            .map_err(CloudError::Style)?;

        trace!(label = tag.label(), normalized, font_size, hue, lightness; "Tag styled");

        Ok(TagStyle {
            normalized,
            font_size,
            color,
        })
    }

    /// Styles every tag, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CloudError::Style`] encountered.
    pub fn style_all(&self, tags: Vec<Tag>) -> Result<Vec<StyledTag>, CloudError> {
        tags.into_iter()
            .map(|tag| {
                let style = self.style(&tag)?;
                Ok(StyledTag { tag, style })
            })
            .collect()
    }
}

/// Returns the hue in degrees, `|hash| mod 360`.
pub fn hue_for_hash(hash: i32) -> f32 {
    (hash.unsigned_abs() % 360) as f32
}

fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + t * (max - min)
}
