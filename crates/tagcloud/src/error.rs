//! Error types for tagcloud operations.
//!
//! This module provides the main error type [`CloudError`] for failures that
//! abort a whole layout pass. Problems with individual tags never abort a
//! pass; they are reported as [`SkipReason`](crate::SkipReason)s instead.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for tagcloud operations.
///
/// # Diagnostic Variants
///
/// The `Input` variant carries the offending source text and, when known,
/// the byte range of the problem, so front ends can render a labeled snippet.
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Input {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl CloudError {
    /// Create a new `Input` error with the associated source text.
    pub fn new_input_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Input {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
