//! Nesting registry.
//!
//! Each container (class, struct, enum or extension) registers itself as the
//! parent of its *direct* nominal-type children only. The full chain of an
//! arbitrarily nested enum is then recovered by following registrations
//! upward, one lookup per level.

use std::collections::HashMap;

use tracing::debug;

use super::generic_parameters;
use crate::model::{GenericParameter, ParentLink};
use crate::syntax::{DeclTree, NodeId, NodeKind};

/// What a container records about itself for each of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParentEntry {
    identity: NodeId,
    identifier: String,
    generics: Vec<GenericParameter>,
}

/// Child identity to parent entry.
#[derive(Debug, Clone, Default)]
pub struct ParentRegistry {
    entries: HashMap<NodeId, ParentEntry>,
}

impl ParentRegistry {
    pub fn register(tree: &DeclTree) -> Self {
        let mut entries = HashMap::new();

        for id in tree.descendants(tree.root()) {
            let Some(entry) = container_entry(tree, id) else {
                continue;
            };
            for &child in tree.children(id) {
                if tree.kind(child).is_nominal_type() {
                    debug!(
                        parent = %entry.identifier,
                        child_kind = tree.kind(child).tag(),
                        "registered nested declaration"
                    );
                    entries.insert(child, entry.clone());
                }
            }
        }

        Self { entries }
    }

    /// Resolves the full chain for `id`, innermost container first.
    ///
    /// Returns `None` for a declaration with no registered parent.
    pub fn parent_chain(&self, id: NodeId) -> Option<ParentLink> {
        let mut entries = Vec::new();
        let mut current = id;
        while let Some(entry) = self.entries.get(&current) {
            entries.push(entry);
            current = entry.identity;
        }

        // Built outermost first so each link can own its parent.
        entries.into_iter().rev().fold(None, |parent, entry| {
            let mut link =
                ParentLink::new(entry.identity, entry.identifier.clone(), entry.generics.clone());
            link.parent = parent.map(Box::new);
            Some(link)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn container_entry(tree: &DeclTree, id: NodeId) -> Option<ParentEntry> {
    let (identifier, generics) = match tree.kind(id) {
        NodeKind::Enum(decl) | NodeKind::Class(decl) | NodeKind::Struct(decl) => {
            (decl.identifier.clone(), generic_parameters(&decl.generics))
        }
        // extension generics are never propagated
        NodeKind::Extension { extended_type, .. } => (extended_type.clone(), Vec::new()),
        _ => return None,
    };
    Some(ParentEntry {
        identity: id,
        identifier,
        generics,
    })
}
