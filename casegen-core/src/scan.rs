//! Parallel, deterministic discovery of Swift sources with directory pruning.
//!
//! Build output, VCS metadata and dependency checkouts are pruned as whole
//! subtrees by `WalkDir::filter_entry`; the remaining entries are filtered
//! in parallel through Rayon's `par_bridge`.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories to exclude by default (SwiftPM, Xcode and package manager conventions).
pub const EXCLUDED_DIRS: &[&str] = &[
    ".build",
    ".git",
    ".swiftpm",
    "DerivedData",
    "Pods",
    "Carthage",
    "node_modules",
];

/// Suffix of every file this tool writes.
pub const GENERATED_SUFFIX: &str = "+CasePaths.swift";

#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

/// Whether `path` is a Swift source this tool should read.
pub fn is_swift_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "swift")
        && !path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(GENERATED_SUFFIX))
}

/// Gathers all .swift files below `root`, sorted by path.
///
/// Previously generated `+CasePaths.swift` files are never returned.
pub fn gather_swift_files(root: &Path, excludes: &[&str]) -> Result<Vec<PathBuf>> {
    let all_excludes: HashSet<&str> = EXCLUDED_DIRS
        .iter()
        .copied()
        .chain(excludes.iter().copied())
        .collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &all_excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if e.file_type().is_file() && is_swift_source(path) {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Failed to gather .swift files from {}", root.display()))?;

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_test_project(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("casegen_scan_{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(dir.join("Sources/App")).unwrap();
        fs::create_dir_all(dir.join(".build/debug")).unwrap();
        fs::create_dir_all(dir.join("Generated")).unwrap();

        fs::write(dir.join("Sources/App/Action.swift"), "enum Action { case a }").unwrap();
        fs::write(dir.join("Sources/App/Action+CasePaths.swift"), "// generated").unwrap();
        fs::write(dir.join("Sources/App/README.md"), "enum Nope {}").unwrap();
        fs::write(dir.join(".build/debug/Built.swift"), "enum Built { case a }").unwrap();
        fs::write(dir.join("Generated/Other.swift"), "enum Other { case a }").unwrap();
        fs::write(dir.join("Package.swift"), "// swift-tools-version:5.5").unwrap();
        dir
    }

    #[test]
    fn test_gather_swift_files() {
        let dir = create_test_project("gather");

        let files = gather_swift_files(&dir, &[]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(&dir).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            names,
            vec!["Generated/Other.swift", "Package.swift", "Sources/App/Action.swift"]
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_custom_excludes() {
        let dir = create_test_project("excludes");

        let files = gather_swift_files(&dir, &["Generated"]).unwrap();
        assert!(files.iter().all(|p| !p.to_string_lossy().contains("Generated")));
        assert_eq!(files.len(), 2);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_is_swift_source() {
        assert!(is_swift_source(Path::new("A.swift")));
        assert!(!is_swift_source(Path::new("A+CasePaths.swift")));
        assert!(!is_swift_source(Path::new("A.swiftinterface")));
        assert!(!is_swift_source(Path::new("swift")));
    }

    #[test]
    fn test_missing_root_is_error() {
        let missing = std::env::temp_dir().join("casegen_scan_definitely_missing_dir");
        assert!(gather_swift_files(&missing, &[]).is_err());
    }
}
