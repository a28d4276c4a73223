//! casegen-core: case-path accessor generation for Swift enums
//!
//! This library scans Swift sources for enum declarations and generates
//! `CasePath` accessors for every case, written to a sibling
//! `+CasePaths.swift` file.
//!
//! # Features
//!
//! - **Nested types**: enums inside classes, structs, enums and extensions
//!   are addressed by their fully qualified name (`A.B.C.Event`)
//! - **Generics**: generic parameters of the enum and of every enclosing
//!   type are carried into generic accessor functions
//! - **Local scopes**: enums declared in functions, closures and blocks are
//!   skipped, as are `private` and `fileprivate` enums
//! - **Deterministic output**: imports, enums and cases are sorted
//! - **Parallel processing**: files are processed independently with Rayon
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use casegen_core::prelude::*;
//!
//! let summary = Casegen::new("/path/to/package").run()?;
//! println!("{} files written", summary.written());
//! ```
//!
//! # Module Organization
//!
//! - [`syntax`]: Declaration tree and the Swift declaration scanner
//! - [`analysis`]: Scope tracking, nesting resolution, record extraction
//! - [`model`]: Generation model handed from analysis to rendering
//! - [`render`]: Accessor rendering and output indentation
//! - [`pipeline`]: Per-file read, generate, write
//! - [`scan`]: Parallel file discovery
//! - [`builder`]: Fluent builder API for a whole run
//! - [`error`]: Typed error handling

pub mod analysis;
pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod render;
pub mod report;
pub mod scan;
pub mod syntax;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{CasegenError, CasegenResult, IoResultExt};

// Builder API
pub use builder::{Casegen, RunSummary};

// Configuration
pub use config::{load_config, load_config_file, CasegenConfig, CONFIG_FILE};

// Analysis
pub use analysis::{analyze, LocalScopes, ParentRegistry};

// Model
pub use model::{
    CaseParameter, CaseRecord, EnumRecord, GenerationModel, GenericParameter, ParentLink,
};

// Rendering
pub use render::{render, render_enum, IndentStyle};

// Logging
pub use logging::init_structured_logging;

// File pipeline
pub use pipeline::{
    generate_for_source, model_for_file, model_for_source, output_file_name, output_path,
    process_file, process_files, FileReport, ProcessOutcome,
};

// Reporting
pub use report::{print_json, print_plain, write_plain};

// File scanning
pub use scan::{gather_swift_files, is_swift_source, EXCLUDED_DIRS, GENERATED_SUFFIX};

// Syntax
pub use syntax::{parse_source, DeclTree, NodeId, NodeKind, SyntaxError};
