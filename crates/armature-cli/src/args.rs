//! Command-line argument definitions for the Armature CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which gallery diagrams to regenerate and
//! control the output directory, configuration file, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Armature diagram regenerator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Names of the diagrams to regenerate (all of them when omitted)
    #[arg(help = "Diagram names to regenerate (all when omitted)")]
    pub diagrams: Vec<String>,

    /// Directory the fixed output paths are resolved against
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// List the available diagrams and their output paths, then exit
    #[arg(long)]
    pub list: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
