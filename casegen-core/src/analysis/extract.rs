//! Record extraction: turns enum declarations into [`EnumRecord`]s.

use tracing::debug;

use super::generic_parameters;
use super::nesting::ParentRegistry;
use super::scope::LocalScopes;
use crate::model::{CaseParameter, CaseRecord, EnumRecord, GenerationModel};
use crate::syntax::{DeclTree, NodeId, NodeKind, TypeDecl};

/// Storage modifier with no meaning on a generated accessor.
const INDIRECT: &str = "indirect";

/// Visits every enum in pre-order and keeps the ones accessors can be
/// generated for.
pub fn extract_model(
    tree: &DeclTree,
    scopes: &LocalScopes,
    registry: &ParentRegistry,
) -> GenerationModel {
    let mut enums = Vec::new();

    for id in tree.descendants(tree.root()) {
        let NodeKind::Enum(decl) = tree.kind(id) else {
            continue;
        };
        if scopes.is_ignored(id) {
            continue;
        }

        let mut record = base_record(decl);
        record.parent_chain = registry.parent_chain(id);

        if record.is_file_local() {
            debug!(enum_name = %record.full_name(), "file-local enum, skipping");
            continue;
        }

        record.cases = extract_cases(tree, id);
        if record.cases.is_empty() {
            debug!(enum_name = %record.full_name(), "enum has no cases, skipping");
            continue;
        }

        debug!(
            enum_name = %record.full_name(),
            cases = record.cases.len(),
            "extracted enum"
        );
        enums.push(record);
    }

    GenerationModel {
        imports: extract_imports(tree),
        enums,
    }
}

fn base_record(decl: &TypeDecl) -> EnumRecord {
    let mut record = EnumRecord::new(decl.identifier.clone());
    record.modifiers = decl
        .modifiers
        .iter()
        .filter(|m| m.as_str() != INDIRECT)
        .cloned()
        .collect();
    record.generics = generic_parameters(&decl.generics);
    record
}

/// One record per case element among the enum's direct children.
fn extract_cases(tree: &DeclTree, enum_id: NodeId) -> Vec<CaseRecord> {
    tree.children(enum_id)
        .iter()
        .filter_map(|&child| match tree.kind(child) {
            NodeKind::Case { elements } => Some(elements),
            _ => None,
        })
        .flatten()
        .map(|element| {
            let parameters = element
                .associated_values
                .iter()
                .map(|value| CaseParameter {
                    label: value.label.clone(),
                    ty: value.ty.clone(),
                })
                .collect();
            CaseRecord::new(element.identifier.clone(), parameters)
        })
        .collect()
}

/// Top-level imports in file order, trimmed.
fn extract_imports(tree: &DeclTree) -> Vec<String> {
    tree.children(tree.root())
        .iter()
        .filter_map(|&child| match tree.kind(child) {
            NodeKind::Import { text } => Some(text.trim().to_string()),
            _ => None,
        })
        .collect()
}
