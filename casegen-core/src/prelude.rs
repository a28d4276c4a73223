//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use casegen_core::prelude::*;
//! ```

// Builder API
pub use crate::builder::{Casegen, RunSummary};

// Analysis and rendering
pub use crate::analysis::analyze;
pub use crate::model::{CaseRecord, EnumRecord, GenerationModel};
pub use crate::render::{render, IndentStyle};
pub use crate::syntax::parse_source;

// File pipeline
pub use crate::pipeline::{generate_for_source, process_file, FileReport, ProcessOutcome};

// Errors and configuration
pub use crate::config::{load_config, CasegenConfig};
pub use crate::error::{CasegenError, CasegenResult};
