//! tagcloud - Weight-driven, collision-free tag cloud layout.
//!
//! A layout pass takes `(label, weight)` pairs and produces, for every tag, a
//! font size, a color and a non-overlapping position, plus the extent of the
//! finished cloud and the scale that fits it into a target viewport.
//!
//! The pass runs in one direction through four stages:
//!
//! 1. [`sequence`] orders tags by descending weight with a hash tiebreak.
//! 2. [`style`] maps weights onto font sizes and HSL colors.
//! 3. [`layout::placement`] places each measured tag along its own spiral.
//! 4. [`layout::bounds`] moves the layout to the origin and fits it to the viewport.
//!
//! Text is measured by an injected [`Measure`] implementation.

pub mod config;
pub mod layout;
pub mod sequence;
pub mod style;

mod error;
mod tag;

pub use tagcloud_core::{color, geometry, text};

pub use error::CloudError;
pub use tag::{PlacedTag, SkipReason, SkippedTag, Tag, TagInput};

use log::{debug, info, trace, warn};

use tagcloud_core::{
    geometry::{Bounds, Insets, Size},
    text::{Measure, TextMeasurer},
};

use config::{AppConfig, validate_viewport};
use layout::{Fit, PlacementRecord, Probe, SpiralEngine, SpiralOutcome};
use style::{StyleMapper, StyledTag};

/// Builder for running tag cloud layout passes.
///
/// A builder owns the configuration and the sizing oracle. Every call to
/// [`refresh`](Self::refresh) is a full, independent recompute; nothing is
/// carried over from earlier passes.
///
/// # Examples
///
/// ```rust
/// use tagcloud::{CloudBuilder, TagInput, config::AppConfig, geometry::Size};
///
/// // A fixed-width measurer keeps the example independent of installed fonts
/// let measure = |label: &str, font_size: f32, _family: &str| {
///     Size::new(label.chars().count() as f32 * font_size * 0.6, font_size)
/// };
/// let builder = CloudBuilder::new(AppConfig::default()).with_measurer(measure);
///
/// let tags = [
///     TagInput::new("rust", 12.0),
///     TagInput::new("layout", 7.0),
///     TagInput::new("spiral", 3.0),
/// ];
/// let cloud = builder
///     .refresh(&tags, Some(Size::new(400.0, 300.0)))
///     .expect("Failed to lay out tags");
///
/// assert_eq!(cloud.tags().len(), 3);
/// assert!(cloud.scale() > 0.0);
/// ```
pub struct CloudBuilder<M = TextMeasurer> {
    config: AppConfig,
    measurer: M,
}

impl Default for CloudBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl CloudBuilder {
    /// Create a new builder that measures text with [`TextMeasurer`].
    ///
    /// # Arguments
    ///
    /// * `config` - Layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            measurer: TextMeasurer::new(),
        }
    }
}

impl<M: Measure> CloudBuilder<M> {
    /// Replaces the sizing oracle.
    pub fn with_measurer<N: Measure>(self, measurer: N) -> CloudBuilder<N> {
        CloudBuilder {
            config: self.config,
            measurer,
        }
    }

    /// Returns the configuration used for every pass.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Recompute the layout of `inputs`.
    ///
    /// `viewport` overrides the configured default viewport. Without either,
    /// the layout keeps its natural size and no [`Fit`] is reported.
    ///
    /// Individual tags that cannot be laid out are reported in
    /// [`CloudLayout::skipped`] and never abort the pass.
    ///
    /// # Errors
    ///
    /// Returns [`CloudError::Config`] for an invalid configuration or
    /// viewport, and [`CloudError::Style`] if a tag color cannot be built.
    pub fn refresh(
        &self,
        inputs: &[TagInput],
        viewport: Option<Size>,
    ) -> Result<CloudLayout, CloudError> {
        self.refresh_with(inputs, viewport, |_, _| {})
    }

    /// Recompute the layout like [`refresh`](Self::refresh), reporting every
    /// spiral probe to `on_probe` together with the label being placed.
    ///
    /// # Errors
    ///
    /// Same as [`refresh`](Self::refresh).
    pub fn refresh_with<F>(
        &self,
        inputs: &[TagInput],
        viewport: Option<Size>,
        mut on_probe: F,
    ) -> Result<CloudLayout, CloudError>
    where
        F: FnMut(&str, &Probe),
    {
        self.config.validate()?;
        let viewport = viewport.or(self.config.viewport());
        if let Some(viewport) = viewport {
            validate_viewport(viewport)?;
        }

        info!(inputs = inputs.len(); "Starting layout pass");

        let sequenced = sequence::sequence(inputs);
        let mut skipped = sequenced.skipped;

        let Some(mapper) = StyleMapper::new(self.config.style(), &sequenced.tags) else {
            info!("No tags to lay out");
            return Ok(CloudLayout::empty(skipped, viewport));
        };
        trace!(range:? = mapper.range(); "Weight range");
        let styled = mapper.style_all(sequenced.tags)?;

        let (measured, degenerate) = self.measure_all(styled);
        skipped.extend(degenerate);

        let boxes: Vec<(usize, Size)> = measured
            .iter()
            .map(|tag| (tag.index, tag.size))
            .collect();
        let engine = SpiralEngine::new(self.config.layout());
        let outcomes = engine.place_with(boxes, |position, probe| {
            on_probe(measured[position].styled.tag.label(), probe)
        });

        let mut placed = Vec::with_capacity(measured.len());
        let mut records = Vec::with_capacity(measured.len());
        for (tag, outcome) in measured.into_iter().zip(outcomes) {
            match outcome {
                SpiralOutcome::Placed(probe) => {
                    records.push(PlacementRecord::new(probe.point, tag.size));
                    placed.push((tag.styled, probe.step + 1));
                }
                SpiralOutcome::Exhausted { probes } => {
                    warn!(label = tag.styled.tag.label(), probes; "Tag could not be placed");
                    skipped.push(SkippedTag::new(
                        tag.styled.tag.label(),
                        SkipReason::UnboundedSearch { probes },
                    ));
                }
            }
        }

        let normalized = layout::normalize(&records, self.config.layout().spacing());
        let tags = placed
            .into_iter()
            .zip(normalized.bounds)
            .map(|((styled, probes), bounds)| {
                PlacedTag::new(
                    styled.tag,
                    styled.style.font_size(),
                    styled.style.color(),
                    bounds,
                    probes,
                )
            })
            .collect::<Vec<_>>();

        let fit = viewport.map(|viewport| layout::fit_to_viewport(normalized.content_size, viewport));

        info!(
            placed = tags.len(),
            skipped = skipped.len(),
            width = normalized.content_size.width(),
            height = normalized.content_size.height();
            "Layout pass finished"
        );
        if let Some(fit) = fit {
            debug!(scale = fit.scale(); "Fitted to viewport");
        }

        Ok(CloudLayout {
            tags,
            skipped,
            content_size: normalized.content_size,
            fit,
        })
    }

    /// Measures every styled tag, splitting off tags with degenerate sizes.
    ///
    /// Measured tags keep their sequence index, so a degenerate tag leaves a
    /// gap in the spiral indices rather than shifting later tags.
    fn measure_all(&self, styled: Vec<StyledTag>) -> (Vec<MeasuredTag>, Vec<SkippedTag>) {
        let padding = Insets::uniform(self.config.layout().item_padding());
        let family = self.config.style().font_family();

        let mut measured = Vec::with_capacity(styled.len());
        let mut degenerate = Vec::new();
        for (index, styled) in styled.into_iter().enumerate() {
            let text_size =
                self.measurer
                    .measure(styled.tag.label(), styled.style.font_size(), family);
            if text_size.is_positive() {
                measured.push(MeasuredTag {
                    index,
                    size: text_size.add_padding(padding),
                    styled,
                });
            } else {
                warn!(
                    label = styled.tag.label(),
                    width = text_size.width(),
                    height = text_size.height();
                    "Tag measured with a degenerate size; excluding it"
                );
                degenerate.push(SkippedTag::new(
                    styled.tag.label(),
                    SkipReason::DegenerateMeasurement(text_size),
                ));
            }
        }
        (measured, degenerate)
    }
}

/// A styled tag with its sequence index and padded box size.
struct MeasuredTag {
    index: usize,
    styled: StyledTag,
    size: Size,
}

/// The result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayout {
    tags: Vec<PlacedTag>,
    skipped: Vec<SkippedTag>,
    content_size: Size,
    fit: Option<Fit>,
}

impl CloudLayout {
    fn empty(skipped: Vec<SkippedTag>, viewport: Option<Size>) -> Self {
        Self {
            tags: Vec::new(),
            skipped,
            content_size: Size::default(),
            fit: viewport.map(|viewport| layout::fit_to_viewport(Size::default(), viewport)),
        }
    }

    /// Returns the placed tags in placement order.
    pub fn tags(&self) -> &[PlacedTag] {
        &self.tags
    }

    /// Returns the tags left out of the layout.
    pub fn skipped(&self) -> &[SkippedTag] {
        &self.skipped
    }

    /// Returns the extent of the content bounding box.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the viewport fit, if a viewport was supplied.
    pub fn fit(&self) -> Option<Fit> {
        self.fit
    }

    /// Returns the uniform scale to apply to the content, one without a viewport.
    pub fn scale(&self) -> f32 {
        self.fit.map_or(1.0, |fit| fit.scale())
    }

    /// Returns every placed tag's box mapped into viewport space.
    ///
    /// Without a viewport the boxes are returned in content space.
    pub fn to_viewport(&self) -> Vec<Bounds> {
        let fit = self.fit.unwrap_or_default();
        self.tags.iter().map(|tag| fit.apply(tag.bounds())).collect()
    }
}
