//! TOML documents read and written by the CLI.
//!
//! The input document lists tags as an array of tables:
//!
//! ```toml
//! [[tag]]
//! label = "rust"
//! weight = 12
//! ```
//!
//! The output document carries the pass-level extent and fit, followed by
//! one `[[tag]]` table per placed tag and one `[[skipped]]` table per
//! excluded tag.

use serde::{Deserialize, Serialize};

use tagcloud::{CloudError, CloudLayout, TagInput};

#[derive(Debug, Deserialize)]
struct InputDocument {
    #[serde(default)]
    tag: Vec<TagInput>,
}

/// Parses a tag list from TOML source.
///
/// # Errors
///
/// Returns [`CloudError::Input`] with the offending span when the source is
/// not a valid tag list.
pub fn parse_tags(src: &str) -> Result<Vec<TagInput>, CloudError> {
    toml::from_str::<InputDocument>(src)
        .map(|document| document.tag)
        .map_err(|err| CloudError::new_input_error(err.message(), err.span(), src))
}

#[derive(Debug, Serialize)]
struct OutputDocument {
    content_width: f32,
    content_height: f32,
    scale: f32,
    offset_x: f32,
    offset_y: f32,
    tag: Vec<OutputTag>,
    skipped: Vec<OutputSkipped>,
}

#[derive(Debug, Serialize)]
struct OutputTag {
    label: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    font_size: f32,
    color: String,
}

#[derive(Debug, Serialize)]
struct OutputSkipped {
    label: String,
    reason: String,
}

/// Renders a finished layout as a TOML document.
///
/// # Errors
///
/// Returns [`CloudError::Export`] if serialization fails.
pub fn render_layout(layout: &CloudLayout) -> Result<String, CloudError> {
    let fit = layout.fit().unwrap_or_default();
    let document = OutputDocument {
        content_width: layout.content_size().width(),
        content_height: layout.content_size().height(),
        scale: fit.scale(),
        offset_x: fit.offset().x(),
        offset_y: fit.offset().y(),
        tag: layout
            .tags()
            .iter()
            .map(|tag| OutputTag {
                label: tag.label().to_string(),
                x: tag.x(),
                y: tag.y(),
                width: tag.width(),
                height: tag.height(),
                font_size: tag.font_size(),
                color: tag.color().to_string(),
            })
            .collect(),
        skipped: layout
            .skipped()
            .iter()
            .map(|skipped| OutputSkipped {
                label: skipped.label().to_string(),
                reason: skipped.reason().to_string(),
            })
            .collect(),
    };

    toml::to_string_pretty(&document).map_err(|err| CloudError::Export(Box::new(err)))
}

#[cfg(test)]
mod tests {
    use tagcloud::{CloudBuilder, geometry::Size};

    use super::*;

    #[test]
    fn test_parse_tags_reads_labels_and_weights() {
        let tags = parse_tags(
            r#"
                [[tag]]
                label = "rust"
                weight = 12

                [[tag]]
                label = "unweighted"
            "#,
        )
        .unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], TagInput::new("rust", 12.0));
        assert_eq!(tags[1], TagInput::without_weight("unweighted"));
    }

    #[test]
    fn test_parse_tags_empty_document() {
        assert!(parse_tags("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tags_reports_span() {
        let src = "[[tag]]\nlabel = \"rust\"\nweight = \"heavy\"\n";
        match parse_tags(src) {
            Err(CloudError::Input { span, src: kept, .. }) => {
                assert!(span.is_some());
                assert_eq!(kept, src);
            }
            other => panic!("expected an input error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_layout_lists_tags_and_skips() {
        let measure = |label: &str, font_size: f32, _: &str| {
            Size::new(label.len() as f32 * font_size, font_size)
        };
        let builder = CloudBuilder::default().with_measurer(measure);
        let tags = [TagInput::new("rust", 2.0), TagInput::without_weight("lost")];
        let layout = builder.refresh(&tags, Some(Size::new(200.0, 100.0))).unwrap();

        let rendered = render_layout(&layout).unwrap();
        assert!(rendered.contains("content_width"));
        assert!(rendered.contains("[[tag]]"));
        assert!(rendered.contains("label = \"rust\""));
        assert!(rendered.contains("[[skipped]]"));
        assert!(rendered.contains("tag has no weight"));
    }
}
