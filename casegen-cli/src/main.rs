//! casegen CLI - generates CasePath accessors for Swift enums.
//!
//! Features:
//! - Recursive scanning with SwiftPM/Xcode build directory pruning
//! - Rayon-powered parallel generation, one sibling file per source
//! - Configurable indentation via flags or casegen.toml
//! - Plain or JSON run reports, and a JSON dump of a single file's model

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use casegen_core::{
    init_structured_logging, load_config, load_config_file, model_for_file, print_json,
    print_plain, CasegenConfig, Casegen, IndentStyle, RunSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates CasePath accessors for Swift enums")]
pub struct Cli {
    /// Path to root directory for scanning
    #[arg(default_value = ".")]
    input: PathBuf,

    /// Indentation character (overrides casegen.toml)
    #[arg(long)]
    indentor: Option<String>,

    /// Indentation width (overrides casegen.toml)
    #[arg(long)]
    indentation_width: Option<usize>,

    /// Directory names to skip while scanning
    #[arg(long, num_args = 1..)]
    exclude: Vec<String>,

    /// Show what would be written without touching any file
    #[arg(long)]
    dry_run: bool,

    /// Output the run report in JSON format
    #[arg(long)]
    json: bool,

    /// Print the generation model of a single Swift file as JSON and exit
    #[arg(long, value_name = "FILE")]
    emit_model: Option<PathBuf>,

    /// Configuration file to use instead of <INPUT>/casegen.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Loads the explicit config file, or casegen.toml from the scan root.
fn load_cli_config(cli: &Cli) -> Result<CasegenConfig> {
    match &cli.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(load_config(&cli.input)
            .context("Failed to load casegen.toml")?
            .unwrap_or_default()),
    }
}

/// Config file values with command line flags applied on top.
fn resolve_indent(cli: &Cli, config: &CasegenConfig) -> IndentStyle {
    let mut style = config.indent_style();
    if let Some(character) = &cli.indentor {
        style.character = character.clone();
    }
    if let Some(width) = cli.indentation_width {
        style.width = width;
    }
    style
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let config = load_cli_config(cli)?;
    let style = resolve_indent(cli, &config);

    Casegen::new(&cli.input)
        .use_config(false)
        .indent(style)
        .exclude_dirs(config.excluded_dirs().iter().cloned())
        .exclude_dirs(cli.exclude.iter().cloned())
        .dry_run(cli.dry_run)
        .run()
}

fn emit_model(path: &Path) -> Result<String> {
    let model = model_for_file(path)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;
    Ok(serde_json::to_string_pretty(&model)?)
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] casegen internal error: {}", info);
        eprintln!("[PANIC] No further files will be written.");
    }));

    // JSON to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();

    if let Some(path) = &cli.emit_model {
        println!("{}", emit_model(path)?);
        return Ok(());
    }

    let summary = run(&cli)?;
    if cli.json {
        print_json(&summary);
    } else {
        print_plain(&summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_temp_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir()
            .join("casegen_cli_test")
            .join(format!("{}_{}_{}", name, std::process::id(), id));
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir).ok();
        }
        fs::create_dir_all(&temp_dir).unwrap();
        temp_dir
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("casegen").chain(args.iter().copied())).unwrap()
    }

    // --- argument parsing ---

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.input, PathBuf::from("."));
        assert!(cli.indentor.is_none());
        assert!(cli.indentation_width.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "Sources",
            "--indentor",
            "\t",
            "--indentation-width",
            "1",
            "--exclude",
            "Generated",
            "Mocks",
            "--dry-run",
            "--json",
        ]);
        assert_eq!(cli.input, PathBuf::from("Sources"));
        assert_eq!(cli.indentor.as_deref(), Some("\t"));
        assert_eq!(cli.indentation_width, Some(1));
        assert_eq!(cli.exclude, vec!["Generated", "Mocks"]);
        assert!(cli.dry_run && cli.json);
    }

    // --- indentation resolution ---

    #[test]
    fn test_flags_override_config() {
        let config: CasegenConfig =
            toml_config("[indent]\ncharacter = \"\\t\"\nwidth = 1\n");

        let cli = parse(&["--indentation-width", "2"]);
        let style = resolve_indent(&cli, &config);
        assert_eq!(style.character, "\t");
        assert_eq!(style.width, 2);

        let cli = parse(&[]);
        assert_eq!(resolve_indent(&cli, &config), IndentStyle::tabs());
    }

    #[test]
    fn test_empty_indentor_strips_indentation() {
        let cli = parse(&["--indentor", ""]);
        let style = resolve_indent(&cli, &CasegenConfig::default());
        assert_eq!(style, IndentStyle::new("", 2));
        assert_eq!(style.apply("enum {\n  case a\n}"), "enum {\ncase a\n}");
    }

    fn toml_config(text: &str) -> CasegenConfig {
        let dir = create_temp_dir("toml");
        let path = dir.join("custom.toml");
        create_file(&path, text);
        load_config_file(&path).unwrap()
    }

    // --- runs ---

    #[test]
    fn test_run_generates_files() {
        let dir = create_temp_dir("run");
        create_file(
            &dir.join("Sources/Action.swift"),
            "enum Action {\n  case tap\n}\n",
        );

        let cli = parse(&[dir.to_str().unwrap()]);
        let summary = run(&cli).unwrap();
        assert_eq!(summary.written(), 1);
        assert!(dir.join("Sources/Action+CasePaths.swift").exists());
    }

    #[test]
    fn test_run_with_explicit_config_and_excludes() {
        let dir = create_temp_dir("explicit_config");
        create_file(&dir.join("Sources/A.swift"), "enum A { case a }\n");
        create_file(&dir.join("Mocks/B.swift"), "enum B { case b }\n");
        create_file(&dir.join("Generated/C.swift"), "enum C { case c }\n");
        let config = dir.join("other.toml");
        create_file(&config, "exclude = [\"Mocks\"]\n");

        let cli = parse(&[
            dir.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--exclude",
            "Generated",
            "--dry-run",
        ]);
        let summary = run(&cli).unwrap();
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.written(), 1);
        assert!(!dir.join("Sources/A+CasePaths.swift").exists());
    }

    #[test]
    fn test_run_rejects_missing_input() {
        let dir = create_temp_dir("missing");
        let cli = parse(&[dir.join("nope").to_str().unwrap()]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let dir = create_temp_dir("bad_config");
        create_file(&dir.join("casegen.toml"), "unknown_key = true\n");
        let cli = parse(&[dir.to_str().unwrap()]);
        assert!(run(&cli).is_err());
    }

    // --- model dump ---

    #[test]
    fn test_emit_model_json() {
        let dir = create_temp_dir("emit");
        let file = dir.join("Event.swift");
        create_file(
            &file,
            "import UIKit\nstruct Screen {\n  enum Event { case load(id: Int) }\n}\n",
        );

        let json: serde_json::Value = serde_json::from_str(&emit_model(&file).unwrap()).unwrap();
        assert_eq!(json["imports"][0], "import UIKit");
        assert_eq!(json["enums"][0]["identifier"], "Event");
        assert_eq!(json["enums"][0]["parent_chain"]["identifier"], "Screen");
        assert_eq!(json["enums"][0]["cases"][0]["parameters"][0]["label"], "id");
        assert_eq!(json["enums"][0]["cases"][0]["parameters"][0]["type"], "Int");
    }

    #[test]
    fn test_emit_model_reports_syntax_errors() {
        let dir = create_temp_dir("emit_bad");
        let file = dir.join("Bad.swift");
        create_file(&file, "enum Bad {\n");
        assert!(emit_model(&file).is_err());
    }
}
