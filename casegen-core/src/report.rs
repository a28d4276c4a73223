//! Output formatting - plaintext and JSON.

use std::io::{self, Write};
use std::path::Path;

use crate::builder::RunSummary;
use crate::pipeline::ProcessOutcome;

fn display_path<'a>(root: &Path, path: &'a Path) -> std::borrow::Cow<'a, str> {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy()
}

/// Writes a human-readable summary.
pub fn write_plain(out: &mut impl Write, summary: &RunSummary) -> io::Result<()> {
    let verb = if summary.dry_run { "WOULD WRITE" } else { "WRITTEN" };

    let written: Vec<_> = summary
        .files
        .iter()
        .filter_map(|f| match &f.outcome {
            ProcessOutcome::Written { output, enums } => Some((output, *enums)),
            _ => None,
        })
        .collect();

    if written.is_empty() {
        writeln!(out, "No case paths generated.")?;
    } else {
        writeln!(out, "{} ({}):", verb, written.len())?;
        for (output, enums) in written {
            writeln!(out, "- {} ({} enums)", display_path(&summary.root, output), enums)?;
        }
    }

    let skipped: Vec<_> = summary
        .files
        .iter()
        .filter_map(|f| match &f.outcome {
            ProcessOutcome::Skipped { reason } => Some((&f.path, reason)),
            _ => None,
        })
        .collect();
    if !skipped.is_empty() {
        writeln!(out, "SKIPPED ({}):", skipped.len())?;
        for (path, reason) in skipped {
            writeln!(out, "- {}: {}", display_path(&summary.root, path), reason)?;
        }
    }

    writeln!(
        out,
        "{} files scanned, {} unchanged, {} without enums",
        summary.files.len(),
        summary.unchanged(),
        summary.without_enums()
    )
}

/// Prints a human-readable summary to stdout.
pub fn print_plain(summary: &RunSummary) {
    let stdout = io::stdout();
    if let Err(e) = write_plain(&mut stdout.lock(), summary) {
        tracing::warn!(error = %e, "failed to print summary");
    }
}

/// Prints the summary as pretty JSON to stdout.
///
/// Falls back to a minimal object if serialization fails.
pub fn print_json(summary: &RunSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "JSON serialization failed");
            println!(
                "{{\"written\": {}, \"skipped\": {}}}",
                summary.written(),
                summary.skipped()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::FileReport;
    use std::path::PathBuf;

    fn summary(dry_run: bool) -> RunSummary {
        let root = PathBuf::from("/pkg");
        RunSummary {
            root: root.clone(),
            dry_run,
            files: vec![
                FileReport {
                    path: root.join("A.swift"),
                    outcome: ProcessOutcome::Written {
                        output: root.join("A+CasePaths.swift"),
                        enums: 2,
                    },
                },
                FileReport {
                    path: root.join("B.swift"),
                    outcome: ProcessOutcome::Skipped {
                        reason: "unclosed '{'".into(),
                    },
                },
                FileReport {
                    path: root.join("C.swift"),
                    outcome: ProcessOutcome::NoEnums,
                },
            ],
        }
    }

    #[test]
    fn test_plain_output() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &summary(false)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "WRITTEN (1):\n- A+CasePaths.swift (2 enums)\nSKIPPED (1):\n- B.swift: unclosed '{'\n3 files scanned, 0 unchanged, 1 without enums\n"
        );
    }

    #[test]
    fn test_plain_dry_run_and_empty() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &summary(true)).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("WOULD WRITE (1):"));

        let empty = RunSummary {
            root: PathBuf::from("/pkg"),
            dry_run: false,
            files: Vec::new(),
        };
        let mut buf = Vec::new();
        write_plain(&mut buf, &empty).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("No case paths generated."));
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(summary(false)).unwrap();
        assert_eq!(value["files"][0]["outcome"]["status"], "written");
        assert_eq!(value["files"][0]["outcome"]["enums"], 2);
        assert_eq!(value["files"][1]["outcome"]["status"], "skipped");
        assert_eq!(value["files"][2]["outcome"]["status"], "no_enums");
    }
}
