//! Error adapter for converting CloudError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Input errors carry
//! their source text, so they are rendered with a labeled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use tagcloud::CloudError;

/// Adapter implementing [`MietteDiagnostic`] for [`CloudError`].
pub struct ErrorAdapter<'a>(pub &'a CloudError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CloudError::Io(_) => "tagcloud::io",
            CloudError::Input { .. } => "tagcloud::input",
            CloudError::Config(_) => "tagcloud::config",
            CloudError::Style(_) => "tagcloud::style",
            CloudError::Export(_) => "tagcloud::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            CloudError::Input { .. } => Some(Box::new(
                "each tag is a [[tag]] table with a string `label` and a numeric `weight`",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            CloudError::Input { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self.0 {
            CloudError::Input {
                span: Some(span), ..
            } => {
                let span = SourceSpan::from(span.clone());
                Some(Box::new(std::iter::once(
                    LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
                )))
            }
            _ => None,
        }
    }
}

/// Renders `err` as a graphical miette report.
///
/// Falls back to the plain error message if the report cannot be rendered.
pub fn render_report(err: &CloudError) -> String {
    let reporter = GraphicalReportHandler::new();
    let mut report = String::new();
    match reporter.render_report(&mut report, &ErrorAdapter(err)) {
        Ok(()) => report,
        Err(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_has_label_and_source() {
        let err = CloudError::new_input_error("invalid type", Some(4..9), "abc = oops");
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), "invalid type");
        assert_eq!(adapter.code().unwrap().to_string(), "tagcloud::input");
        assert!(adapter.source_code().is_some());
        assert!(adapter.help().is_some());

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].len(), 5);
    }

    #[test]
    fn test_input_error_without_span_has_no_labels() {
        let err = CloudError::new_input_error("bad", None, "x");
        assert!(ErrorAdapter(&err).labels().is_none());
    }

    #[test]
    fn test_config_error_has_code_only() {
        let err = CloudError::Config("layout.max_probes must be at least 1".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "tagcloud::config");
        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_render_report_includes_code_and_message() {
        let err = CloudError::Config("layout.max_probes must be at least 1".to_string());
        let report = render_report(&err);

        assert!(report.contains("tagcloud::config"), "{report}");
        assert!(report.contains("layout.max_probes must be at least 1"), "{report}");
    }

    #[test]
    fn test_render_report_shows_input_source() {
        let src = "[[tag]]\nweight = \"heavy\"\n";
        let err = CloudError::new_input_error("invalid type", Some(17..24), src);
        let report = render_report(&err);

        assert!(report.contains("invalid type"), "{report}");
        assert!(report.contains("heavy"), "{report}");
    }
}
