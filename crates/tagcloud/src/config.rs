//! Configuration types for tagcloud layout passes.
//!
//! This module provides configuration structures that control how tags are
//! styled and placed. All types implement [`serde::Deserialize`] for loading
//! from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing, padding and spiral search parameters.
//! - [`StyleConfig`] - Font size range, font family and color parameters.
//!
//! A configuration is immutable for the duration of one layout pass.
//!
//! # Example
//!
//! ```
//! # use tagcloud::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.style().font_size_range(), (16.0, 32.0));
//! ```

use serde::Deserialize;

use tagcloud_core::geometry::Size;

use crate::CloudError;

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Default target viewport used when a pass is not given one explicitly.
    #[serde(default)]
    viewport: Option<Size>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Spacing and spiral search settings.
    /// * `style` - Font and color settings.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            style,
            viewport: None,
        }
    }

    /// Sets the default target viewport.
    pub fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the default target viewport, if configured.
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Checks every section for values a layout pass cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), CloudError> {
        self.layout.validate()?;
        self.style.validate()?;
        if let Some(viewport) = self.viewport {
            validate_viewport(viewport)?;
        }
        Ok(())
    }
}

/// Spacing and spiral search parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum clearance between the boxes of any two tags.
    spacing: f32,

    /// Padding added on every side of a tag's measured text.
    item_padding: f32,

    /// Angle offset in degrees applied to every spiral.
    seed: f32,

    /// Number of spiral probes after which a tag is reported as unplaceable.
    max_probes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            item_padding: 4.0,
            seed: 0.0,
            max_probes: 20_000,
        }
    }
}

impl LayoutConfig {
    /// Sets the clearance between tag boxes.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the padding added around each tag's text.
    pub fn with_item_padding(mut self, item_padding: f32) -> Self {
        self.item_padding = item_padding;
        self
    }

    /// Sets the spiral angle offset in degrees.
    pub fn with_seed(mut self, seed: f32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the probe cap for a single tag's spiral search.
    pub fn with_max_probes(mut self, max_probes: usize) -> Self {
        self.max_probes = max_probes;
        self
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn item_padding(&self) -> f32 {
        self.item_padding
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    pub fn max_probes(&self) -> usize {
        self.max_probes
    }

    fn validate(&self) -> Result<(), CloudError> {
        non_negative("layout.spacing", self.spacing)?;
        non_negative("layout.item_padding", self.item_padding)?;
        if !self.seed.is_finite() {
            return Err(CloudError::Config(format!(
                "layout.seed must be finite, got {}",
                self.seed
            )));
        }
        if self.max_probes == 0 {
            return Err(CloudError::Config(
                "layout.max_probes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Font and color parameters for the style mapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font size used as the lower end of the default font size range.
    base_font_size: f32,

    /// Font size assigned to the lightest and heaviest tags, as `[min, max]`.
    font_size_range: Option<[f32; 2]>,

    /// Font family passed through to the sizing oracle.
    font_family: String,

    /// HSL saturation in percent shared by every tag.
    color_saturation: f32,

    /// HSL lightness in percent for the lightest and heaviest tags, as `[min, max]`.
    lightness_range: [f32; 2],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            font_size_range: None,
            font_family: "Arial".to_string(),
            color_saturation: 65.0,
            lightness_range: [30.0, 55.0],
        }
    }
}

impl StyleConfig {
    /// Sets the base font size.
    pub fn with_base_font_size(mut self, size: f32) -> Self {
        self.base_font_size = size;
        self
    }

    /// Sets an explicit font size range.
    pub fn with_font_size_range(mut self, min: f32, max: f32) -> Self {
        self.font_size_range = Some([min, max]);
        self
    }

    /// Sets the font family passed to the sizing oracle.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the color saturation in percent.
    pub fn with_color_saturation(mut self, saturation: f32) -> Self {
        self.color_saturation = saturation;
        self
    }

    /// Sets the lightness range in percent.
    pub fn with_lightness_range(mut self, min: f32, max: f32) -> Self {
        self.lightness_range = [min, max];
        self
    }

    pub fn base_font_size(&self) -> f32 {
        self.base_font_size
    }

    /// Returns the effective `(min, max)` font size range.
    ///
    /// Without an explicit range, tags span from the base font size to twice
    /// the base font size.
    pub fn font_size_range(&self) -> (f32, f32) {
        match self.font_size_range {
            Some([min, max]) => (min, max),
            None => (self.base_font_size, self.base_font_size * 2.0),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color_saturation(&self) -> f32 {
        self.color_saturation
    }

    /// Returns the `(min, max)` lightness range in percent.
    pub fn lightness_range(&self) -> (f32, f32) {
        let [min, max] = self.lightness_range;
        (min, max)
    }

    fn validate(&self) -> Result<(), CloudError> {
        if !(self.base_font_size.is_finite() && self.base_font_size > 0.0) {
            return Err(CloudError::Config(format!(
                "style.base_font_size must be positive, got {}",
                self.base_font_size
            )));
        }

        let (min_font, max_font) = self.font_size_range();
        if !(min_font.is_finite() && max_font.is_finite() && min_font > 0.0 && min_font <= max_font)
        {
            return Err(CloudError::Config(format!(
                "style.font_size_range must satisfy 0 < min <= max, got [{min_font}, {max_font}]"
            )));
        }

        percentage("style.color_saturation", self.color_saturation)?;

        let (min_light, max_light) = self.lightness_range();
        percentage("style.lightness_range", min_light)?;
        percentage("style.lightness_range", max_light)?;
        if min_light > max_light {
            return Err(CloudError::Config(format!(
                "style.lightness_range must satisfy min <= max, got [{min_light}, {max_light}]"
            )));
        }
        Ok(())
    }
}

/// Checks that a target viewport has a positive, finite extent on both axes.
pub(crate) fn validate_viewport(viewport: Size) -> Result<(), CloudError> {
    if viewport.is_positive() {
        Ok(())
    } else {
        Err(CloudError::Config(format!(
            "viewport must be positive, got {}x{}",
            viewport.width(),
            viewport.height()
        )))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), CloudError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CloudError::Config(format!(
            "{name} must be a non-negative number, got {value}"
        )))
    }
}

fn percentage(name: &str, value: f32) -> Result<(), CloudError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(CloudError::Config(format!(
            "{name} must be within [0, 100], got {value}"
        )))
    }
}
