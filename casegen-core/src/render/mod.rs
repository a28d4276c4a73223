//! Rendering of a [`GenerationModel`](crate::model::GenerationModel) into
//! Swift source text.

pub mod casepaths;
pub mod indent;

pub use casepaths::{render, render_enum, BANNER, CASE_PATHS_IMPORT};
pub use indent::IndentStyle;
