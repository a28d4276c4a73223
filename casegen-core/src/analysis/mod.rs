//! Declaration-tree analysis.
//!
//! Builds a [`GenerationModel`] from a [`DeclTree`] in three passes:
//!
//! ```text
//! ┌─────────────────────┐     ┌─────────────────────┐
//! │     scope.rs        │     │    nesting.rs       │
//! │  ─────────────────  │     │  ─────────────────  │
//! │  Enums inside local │     │  Direct child to    │
//! │  scopes (ignored)   │     │  parent registry    │
//! └──────────┬──────────┘     └──────────┬──────────┘
//!            │                           │
//!            └───────────┬───────────────┘
//!                        ▼
//!            ┌─────────────────────┐
//!            │    extract.rs       │
//!            │  ─────────────────  │
//!            │  Enum records,      │
//!            │  cases, imports     │
//!            └─────────────────────┘
//! ```
//!
//! The first two passes are independent reads of the tree. Analysis never
//! fails: anything it cannot use is left out of the model.
//!
//! # Example
//!
//! ```ignore
//! use casegen_core::{analyze, syntax::parse_source};
//!
//! let tree = parse_source("enum E { case a, b(Int) }")?;
//! let model = analyze(&tree);
//! assert_eq!(model.enums[0].cases.len(), 2);
//! ```

pub mod extract;
pub mod nesting;
pub mod scope;

use tracing::debug;

use crate::model::{GenerationModel, GenericParameter};
use crate::syntax::{DeclTree, GenericParamDecl};

pub use extract::extract_model;
pub use nesting::ParentRegistry;
pub use scope::LocalScopes;

/// Analyzes one declaration tree.
pub fn analyze(tree: &DeclTree) -> GenerationModel {
    let scopes = LocalScopes::collect(tree);
    let registry = ParentRegistry::register(tree);
    let model = extract_model(tree, &scopes, &registry);
    debug!(
        nodes = tree.len(),
        local_enums = scopes.len(),
        nested = registry.len(),
        enums = model.enums.len(),
        imports = model.imports.len(),
        "analysis complete"
    );
    model
}

pub(crate) fn generic_parameters(decls: &[GenericParamDecl]) -> Vec<GenericParameter> {
    decls
        .iter()
        .map(|g| GenericParameter {
            identifier: g.name.clone(),
            constraint: g.inherited_type.clone(),
        })
        .collect()
}
