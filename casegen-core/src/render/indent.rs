//! Output indentation.
//!
//! The renderer always indents with a two-space unit. A configured style is
//! applied afterwards by replacing every two-space run with the configured
//! unit. The substitution is textual: two consecutive spaces inside a
//! verbatim type string are rewritten too. An empty character or a zero
//! width strips indentation altogether.

use serde::{Deserialize, Serialize};

/// The indentation unit the renderer emits.
pub const CANONICAL_UNIT: &str = "  ";

/// Indentation character repeated `width` times per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentStyle {
    pub character: String,
    pub width: usize,
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            character: " ".to_string(),
            width: 2,
        }
    }
}

impl IndentStyle {
    pub fn new(character: impl Into<String>, width: usize) -> Self {
        Self {
            character: character.into(),
            width,
        }
    }

    /// Two spaces of indentation.
    pub fn spaces() -> Self {
        Self::default()
    }

    /// One tab per level.
    pub fn tabs() -> Self {
        Self {
            character: "\t".to_string(),
            width: 1,
        }
    }

    /// One level of indentation in this style.
    pub fn unit(&self) -> String {
        self.character.repeat(self.width)
    }

    /// Rewrites canonically indented text into this style.
    pub fn apply(&self, text: &str) -> String {
        let unit = self.unit();
        if unit == CANONICAL_UNIT {
            return text.to_string();
        }
        text.replace(CANONICAL_UNIT, &unit)
    }
}
