//! # PageCraft CLI
//!
//! Command-line host for PageCraft design files: create a starter design,
//! inspect or validate an existing one, and export a design to a
//! self-contained HTML document.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pagecraft_core::{DesignDocument, Editor, Viewport, DEFAULT_DESIGN_FILENAME};
use pagecraft_export::{ExportConfig, HtmlExporter};

/// PageCraft design file tool.
#[derive(Debug, Parser)]
#[command(name = "pagecraft", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Preview viewport choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewportArg {
    /// Phone preview (375px).
    Mobile,
    /// Tablet preview (768px).
    Tablet,
    /// Desktop preview (1200px).
    Desktop,
}

impl From<ViewportArg> for Viewport {
    fn from(arg: ViewportArg) -> Self {
        match arg {
            ViewportArg::Mobile => Self::Mobile,
            ViewportArg::Tablet => Self::Tablet,
            ViewportArg::Desktop => Self::Desktop,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a starter design file with one empty page.
    New {
        /// Output path for the design file.
        #[arg(long, default_value = DEFAULT_DESIGN_FILENAME)]
        output: PathBuf,
        /// Initial preview viewport.
        #[arg(long, value_enum, default_value = "desktop")]
        viewport: ViewportArg,
    },
    /// Parse a design file and print a summary.
    Inspect {
        /// Path to the design file.
        design: PathBuf,
    },
    /// Check that a design file parses and validates.
    Validate {
        /// Path to the design file.
        design: PathBuf,
    },
    /// Export a design file to a self-contained HTML document.
    Export {
        /// Path to the design file.
        design: PathBuf,
        /// Output path for the HTML document.
        #[arg(long, default_value = "design.html")]
        output: PathBuf,
        /// Document title.
        #[arg(long, env = "PAGECRAFT_EXPORT_TITLE", default_value = "PageCraft Design")]
        title: String,
    },
}

/// Run a parsed command.
///
/// # Errors
///
/// Returns an error for unreadable or invalid design files, or when output
/// files cannot be written.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::New { output, viewport } => new_design(&output, viewport.into()),
        Command::Inspect { design } => inspect_design(&design),
        Command::Validate { design } => validate_design(&design),
        Command::Export {
            design,
            output,
            title,
        } => export_design(&design, &output, title),
    }
}

/// Create a starter design file.
fn new_design(output: &Path, viewport: Viewport) -> anyhow::Result<()> {
    let editor = Editor::new(viewport);
    let json = editor.to_json()?;
    std::fs::write(output, json)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!("wrote starter design to {}", output.display());
    println!("Created {} ({viewport} viewport)", output.display());
    Ok(())
}

/// Load and fully validate a design file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub fn load_design(path: &Path) -> anyhow::Result<pagecraft_core::Document> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = DesignDocument::from_json(&contents)
        .and_then(DesignDocument::into_document)
        .with_context(|| format!("invalid design file {}", path.display()))?;
    Ok(document)
}

/// Print a summary of a design file.
fn inspect_design(path: &Path) -> anyhow::Result<()> {
    let document = load_design(path)?;
    println!(
        "{}: {} viewport, {}x{} canvas, {} pages, {} elements",
        path.display(),
        document.viewport,
        document.canvas_width(),
        document.canvas_height,
        document.pages.len(),
        document.element_count(),
    );
    for page in &document.pages {
        println!("  {} ({} elements)", page.name, page.elements.len());
        for element in page.elements_in_z_order() {
            println!(
                "    [z{}] {} at ({}, {})",
                element.z_index, element.kind, element.position.x, element.position.y,
            );
        }
    }
    Ok(())
}

/// Validate a design file, reporting success or failure.
fn validate_design(path: &Path) -> anyhow::Result<()> {
    let document = load_design(path)?;
    println!(
        "{} is valid ({} pages, {} elements)",
        path.display(),
        document.pages.len(),
        document.element_count(),
    );
    Ok(())
}

/// Export a design file to HTML.
fn export_design(design: &Path, output: &Path, title: String) -> anyhow::Result<()> {
    let document = load_design(design)?;
    let exporter = HtmlExporter::new(ExportConfig {
        title,
        ..ExportConfig::default()
    });
    let html = exporter.export(&document)?;
    std::fs::write(output, html)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!("exported {} to {}", design.display(), output.display());
    println!("Exported {} -> {}", design.display(), output.display());
    Ok(())
}
