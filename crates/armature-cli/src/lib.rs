//! CLI logic for the Armature diagram regenerator.
//!
//! The CLI is a thin loop over the built-in gallery: resolve which diagrams
//! were asked for, build each dataset, render it, and write it to its fixed
//! output path under the chosen directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use armature::{ArmatureError, gallery};

/// Run the Armature CLI application
///
/// Regenerates the selected gallery diagrams (all of them when none are
/// named) and prints one confirmation line per written file.
///
/// # Errors
///
/// Returns `ArmatureError` for:
/// - An unknown diagram name
/// - Configuration loading errors
/// - Diagram validation errors
/// - File I/O errors (including a missing output directory)
pub fn run(args: &Args) -> Result<(), ArmatureError> {
    if args.list {
        for entry in &gallery::ENTRIES {
            println!("{:<18} {}", entry.name, entry.output);
        }
        return Ok(());
    }

    let app_config = config::load_config(args.config.as_deref())?;
    let background = app_config.style().background_color()?;

    let out_dir = args
        .out_dir
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| app_config.output().directory().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let entries: Vec<&gallery::GalleryEntry> = if args.diagrams.is_empty() {
        gallery::ENTRIES.iter().collect()
    } else {
        args.diagrams
            .iter()
            .map(|name| {
                gallery::find(name).ok_or_else(|| ArmatureError::UnknownDiagram(name.clone()))
            })
            .collect::<Result<_, _>>()?
    };

    for entry in entries {
        let mut diagram = (entry.build)();
        if let Some(bg) = background {
            diagram.canvas_mut().set_background(Some(bg));
        }

        let path = out_dir.join(entry.output);
        info!(
            name = entry.name,
            path = path.display().to_string();
            "Rendering diagram",
        );

        armature::write_svg(&diagram, &path)?;
        println!("Generated {}", path.display());
    }

    Ok(())
}
