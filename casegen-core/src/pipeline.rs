//! Per-file pipeline: read, scan, analyze, render, write.
//!
//! Every file gets its own tree and model; nothing is shared between files,
//! so [`process_files`] fans them out over the Rayon pool.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::analysis::analyze;
use crate::error::{CasegenError, CasegenResult, IoResultExt};
use crate::model::GenerationModel;
use crate::render::{render, IndentStyle};
use crate::scan::GENERATED_SUFFIX;
use crate::syntax::{parse_source, SyntaxError};

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// Output was written (or would be, in a dry run).
    Written { output: PathBuf, enums: usize },
    /// Output already on disk with identical content.
    Unchanged { output: PathBuf },
    /// No enum with cases to generate for.
    NoEnums,
    /// File could not be processed.
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: ProcessOutcome,
}

/// Scans and analyzes one source unit.
pub fn model_for_source(source: &str) -> Result<GenerationModel, SyntaxError> {
    let tree = parse_source(source)?;
    Ok(analyze(&tree))
}

/// Renders accessors for one source unit in canonical indentation.
///
/// Returns `None` when no enum with at least one case survives analysis.
pub fn generate_for_source(source: &str) -> Result<Option<String>, SyntaxError> {
    let model = model_for_source(source)?;
    if !model.has_cases() {
        return Ok(None);
    }
    Ok(Some(render(&model)))
}

/// Reads a file and returns its generation model.
pub fn model_for_file(path: &Path) -> CasegenResult<GenerationModel> {
    let source = fs::read_to_string(path).with_path(path)?;
    model_for_source(&source).map_err(|e| CasegenError::from_syntax(path, e))
}

/// Name of the file generated next to `path`.
///
/// `Action.swift` becomes `Action+CasePaths.swift`, `Optional+.swift`
/// becomes `Optional+CasePaths.swift`.
pub fn output_file_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let components: Vec<&str> = name.split('.').collect();
    let stem = if components.iter().filter(|c| !c.is_empty()).count() > 1 {
        components[..components.len() - 1].join(".")
    } else {
        name.clone()
    };

    format!("{}{}", stem.trim_matches('+'), GENERATED_SUFFIX)
}

pub fn output_path(path: &Path) -> PathBuf {
    path.with_file_name(output_file_name(path))
}

/// Generates, indents and writes the sibling output of one file.
pub fn process_file(path: &Path, style: &IndentStyle, dry_run: bool) -> CasegenResult<ProcessOutcome> {
    let source = fs::read_to_string(path).with_path(path)?;
    let model = model_for_source(&source).map_err(|e| CasegenError::from_syntax(path, e))?;
    if !model.has_cases() {
        return Ok(ProcessOutcome::NoEnums);
    }

    let enums = model.enums.iter().filter(|e| !e.cases.is_empty()).count();
    let content = style.apply(&render(&model));
    let output = output_path(path);

    if fs::read_to_string(&output).is_ok_and(|existing| existing == content) {
        return Ok(ProcessOutcome::Unchanged { output });
    }
    if !dry_run {
        fs::write(&output, content).with_path(&output)?;
    }

    info!(
        source = %path.display(),
        output = %output.display(),
        enums,
        dry_run,
        "generated case paths"
    );
    Ok(ProcessOutcome::Written { output, enums })
}

/// Processes files in parallel. Results come back sorted by path.
///
/// Read, scan and write failures of single files become
/// [`ProcessOutcome::Skipped`]; any other error aborts the run.
pub fn process_files(
    files: &[PathBuf],
    style: &IndentStyle,
    dry_run: bool,
) -> CasegenResult<Vec<FileReport>> {
    let mut reports = files
        .par_iter()
        .map(|path| {
            let outcome = match process_file(path, style, dry_run) {
                Ok(outcome) => outcome,
                Err(e) if e.is_recoverable() => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    ProcessOutcome::Skipped {
                        reason: e.to_string(),
                    }
                }
                Err(e) => return Err(e),
            };
            Ok(FileReport {
                path: path.clone(),
                outcome,
            })
        })
        .collect::<CasegenResult<Vec<_>>>()?;

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}
