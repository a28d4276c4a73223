//! Configuration loading from casegen.toml.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{CasegenError, CasegenResult, IoResultExt};
use crate::render::IndentStyle;

/// File name looked up at the scan root.
pub const CONFIG_FILE: &str = "casegen.toml";

/// Main configuration structure for casegen.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CasegenConfig {
    /// Directory names to skip in addition to the built-in ones.
    pub exclude: Option<Vec<String>>,
    /// Output indentation.
    pub indent: Option<IndentStyle>,
}

impl CasegenConfig {
    /// Indentation to render with, falling back to two spaces.
    pub fn indent_style(&self) -> IndentStyle {
        self.indent.clone().unwrap_or_default()
    }

    pub fn excluded_dirs(&self) -> &[String] {
        self.exclude.as_deref().unwrap_or_default()
    }
}

/// Loads configuration from casegen.toml in `root` if it exists.
pub fn load_config(root: &Path) -> CasegenResult<Option<CasegenConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> CasegenResult<CasegenConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    toml::from_str(&content).map_err(|e| CasegenError::config(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("casegen_config_{}_{}", name, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = temp_root("missing");
        assert!(load_config(&dir).unwrap().is_none());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_full_config() {
        let dir = temp_root("full");
        fs::write(
            dir.join(CONFIG_FILE),
            "exclude = [\"Generated\"]\n\n[indent]\ncharacter = \"\\t\"\nwidth = 1\n",
        )
        .unwrap();

        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.excluded_dirs(), &["Generated".to_string()]);
        assert_eq!(cfg.indent_style(), IndentStyle::tabs());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_defaults() {
        let cfg = CasegenConfig::default();
        assert!(cfg.excluded_dirs().is_empty());
        assert_eq!(cfg.indent_style(), IndentStyle::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = temp_root("invalid");
        fs::write(dir.join(CONFIG_FILE), "exclude = 3").unwrap();
        let err = load_config(&dir).unwrap_err();
        assert!(matches!(err, CasegenError::Config { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_indent_character_is_accepted() {
        let dir = temp_root("empty_indent");
        fs::write(dir.join(CONFIG_FILE), "[indent]\ncharacter = \"\"\n").unwrap();
        let cfg = load_config(&dir).unwrap().unwrap();
        assert_eq!(cfg.indent_style(), IndentStyle::new("", 2));
        assert_eq!(cfg.indent_style().unit(), "");
        fs::remove_dir_all(&dir).ok();
    }
}
