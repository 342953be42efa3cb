//! Text measurement for tag labels.
//!
//! The layout engine never shapes text itself. It asks a [`Measure`]
//! implementation, the sizing oracle, how large a label renders at a given
//! font size and family.
//!
//! # Overview
//!
//! - [`Measure`] - The sizing oracle contract
//! - [`TextMeasurer`] - Measures with real font metrics through cosmic-text
//!
//! Any `Fn(&str, f32, &str) -> Size` closure is also a [`Measure`], which is
//! convenient for tests and for hosts that already own a text engine.
//!
//! ```
//! # use tagcloud_core::{geometry::Size, text::Measure};
//! let fixed_width = |label: &str, font_size: f32, _family: &str| {
//!     Size::new(label.chars().count() as f32 * font_size * 0.5, font_size)
//! };
//! let size = fixed_width.measure("rust", 20.0, "Arial");
//! assert_eq!(size, Size::new(40.0, 20.0));
//! ```

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, trace};

use crate::geometry::Size;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Average glyph advance as a multiple of the font size, used when shaping
/// produces no glyphs (for example when no system fonts are installed).
const FALLBACK_ADVANCE_FACTOR: f32 = 0.55;

/// Sizing oracle: reports the rendered size of a label.
///
/// Implementations must be stable for a given rendering environment: the same
/// inputs always yield the same size. The engine calls [`Measure::measure`]
/// once per tag per font size assignment.
pub trait Measure {
    /// Returns the rendered width and height of `label` at `font_size` pixels
    /// in `font_family`.
    fn measure(&self, label: &str, font_size: f32, font_family: &str) -> Size;
}

impl<F> Measure for F
where
    F: Fn(&str, f32, &str) -> Size,
{
    fn measure(&self, label: &str, font_size: f32, font_family: &str) -> Size {
        self(label, font_size, font_family)
    }
}

/// Measures labels with cosmic-text shaping against the system font database.
///
/// The font database is loaded once per process on first use and shared by
/// every `TextMeasurer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMeasurer;

impl TextMeasurer {
    pub fn new() -> Self {
        Self
    }
}

impl Measure for TextMeasurer {
    fn measure(&self, label: &str, font_size: f32, font_family: &str) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(label, font_size, font_family)
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the size of text in pixels using cosmic-text.
    ///
    /// Multi-line labels are measured as the widest line by the sum of line
    /// heights. Returns a zero size for empty text.
    fn calculate_text_size(&self, text: &str, font_size: f32, font_family: &str) -> Size {
        if text.is_empty() || !font_size.is_finite() || font_size <= 0.0 {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_FACTOR);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font_family));

        // Unlimited size so labels never wrap
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width <= 0.0 {
            let widest_line = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
            max_width = widest_line as f32 * font_size * FALLBACK_ADVANCE_FACTOR;
        }
        if total_height <= 0.0 {
            total_height = text.lines().count().max(1) as f32 * metrics.line_height;
        }

        trace!(text, font_size, width = max_width, height = total_height; "Measured text");

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
