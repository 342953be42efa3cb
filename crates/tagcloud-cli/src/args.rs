//! Command-line argument definitions for the tagcloud CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the target viewport and logging verbosity.

use clap::Parser;

/// Command-line arguments for the tagcloud layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input tag list (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output layout file (TOML)
    #[arg(short, long, default_value = "cloud.toml")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Target viewport width; requires --height
    #[arg(long, requires = "height")]
    pub width: Option<f32>,

    /// Target viewport height; requires --width
    #[arg(long, requires = "width")]
    pub height: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
