//! Builder pattern API for generating case paths over a directory tree.
//!
//! ```rust,ignore
//! use casegen_core::prelude::*;
//!
//! let summary = Casegen::new("/path/to/package")
//!     .indent(IndentStyle::tabs())
//!     .exclude_dirs(["Generated"])
//!     .dry_run(true)
//!     .run()?;
//!
//! println!("Written: {}", summary.written());
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::load_config;
use crate::error::CasegenError;
use crate::pipeline::{process_files, FileReport, ProcessOutcome};
use crate::render::IndentStyle;
use crate::scan::gather_swift_files;

/// Builder for configuring a generation run.
#[derive(Debug, Clone)]
pub struct Casegen {
    /// Directory to scan
    root: PathBuf,

    /// Indentation override; `casegen.toml` or two spaces otherwise
    indent: Option<IndentStyle>,

    /// Directory names to skip, on top of the built-in ones
    excluded_dirs: Vec<String>,

    /// Dry-run mode (don't write files)
    dry_run: bool,

    /// Whether to read `casegen.toml` from the root
    use_config: bool,
}

impl Casegen {
    /// Create a new run for the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            indent: None,
            excluded_dirs: Vec::new(),
            dry_run: false,
            use_config: true,
        }
    }

    /// Set the output indentation, overriding the config file.
    pub fn indent(mut self, style: IndentStyle) -> Self {
        self.indent = Some(style);
        self
    }

    /// Add directories to exclude from scanning.
    pub fn exclude_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Enable dry-run mode (no file modifications).
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Enable or disable reading `casegen.toml`.
    pub fn use_config(mut self, enabled: bool) -> Self {
        self.use_config = enabled;
        self
    }

    /// Run generation and return a per-file summary.
    pub fn run(&self) -> Result<RunSummary> {
        if !self.root.is_dir() {
            return Err(CasegenError::invalid_argument(format!(
                "not a directory: {}",
                self.root.display()
            ))
            .into());
        }

        // 1. Configuration
        let config = if self.use_config {
            load_config(&self.root)
                .context("Failed to load casegen.toml")?
                .unwrap_or_default()
        } else {
            Default::default()
        };

        let style = self.indent.clone().unwrap_or_else(|| config.indent_style());

        let excludes: Vec<&str> = config
            .excluded_dirs()
            .iter()
            .chain(&self.excluded_dirs)
            .map(String::as_str)
            .collect();

        // 2. Gather files
        let files = gather_swift_files(&self.root, &excludes)?;

        // 3. Generate
        let files = process_files(&files, &style, self.dry_run)
            .context("Failed to generate case paths")?;

        let summary = RunSummary {
            root: self.root.clone(),
            dry_run: self.dry_run,
            files,
        };
        info!(
            root = %summary.root.display(),
            scanned = summary.files.len(),
            written = summary.written(),
            skipped = summary.skipped(),
            "run complete"
        );
        Ok(summary)
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Root path that was scanned
    pub root: PathBuf,

    /// Whether writes were suppressed
    pub dry_run: bool,

    /// One report per scanned file, sorted by path
    pub files: Vec<FileReport>,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&ProcessOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }

    /// Files whose output was written (or would be, in a dry run).
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, ProcessOutcome::Written { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, ProcessOutcome::Unchanged { .. }))
    }

    pub fn without_enums(&self) -> usize {
        self.count(|o| matches!(o, ProcessOutcome::NoEnums))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ProcessOutcome::Skipped { .. }))
    }

    /// Check if any file had to be skipped.
    pub fn has_skipped(&self) -> bool {
        self.skipped() > 0
    }
}
