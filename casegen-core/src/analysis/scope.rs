//! Local-scope tracking.
//!
//! An enum declared in a function, closure or statement block has no name
//! that a sibling file could refer to, so no accessors can be generated for
//! it. This pass records every such enum, whatever the depth of the local
//! scope above it.

use std::collections::HashSet;

use tracing::debug;

use crate::syntax::{DeclTree, NodeId, NodeKind};

/// Enums that sit below a local scope.
#[derive(Debug, Clone, Default)]
pub struct LocalScopes {
    ignored: HashSet<NodeId>,
}

impl LocalScopes {
    /// Walks the whole tree once, carrying an "inside a local scope" flag down.
    pub fn collect(tree: &DeclTree) -> Self {
        let mut ignored = HashSet::new();
        let mut stack: Vec<(NodeId, bool)> = vec![(tree.root(), false)];

        while let Some((id, in_local)) = stack.pop() {
            let kind = tree.kind(id);
            if in_local {
                if let NodeKind::Enum(decl) = kind {
                    debug!(enum_name = %decl.identifier, "enum is local, ignoring");
                    ignored.insert(id);
                }
            }
            let below_local = in_local || kind.opens_local_scope();
            stack.extend(tree.children(id).iter().map(|&child| (child, below_local)));
        }

        Self { ignored }
    }

    #[inline]
    pub fn is_ignored(&self, id: NodeId) -> bool {
        self.ignored.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TypeDecl;

    #[test]
    fn test_enum_under_function_is_ignored() {
        let mut tree = DeclTree::new();
        let root = tree.root();
        let f = tree.push(
            root,
            NodeKind::Function {
                identifier: "f".into(),
            },
        );
        let local = tree.push(f, NodeKind::Enum(TypeDecl::new("Local")));
        let top = tree.push(root, NodeKind::Enum(TypeDecl::new("Top")));

        let scopes = LocalScopes::collect(&tree);
        assert!(scopes.is_ignored(local));
        assert!(!scopes.is_ignored(top));
        assert_eq!(scopes.len(), 1);
    }

    #[test]
    fn test_local_scope_reaches_through_containers() {
        // func f() { struct S { enum Deep { } } }
        let mut tree = DeclTree::new();
        let root = tree.root();
        let f = tree.push(
            root,
            NodeKind::Function {
                identifier: "f".into(),
            },
        );
        let s = tree.push(f, NodeKind::Struct(TypeDecl::new("S")));
        let deep = tree.push(s, NodeKind::Enum(TypeDecl::new("Deep")));

        let scopes = LocalScopes::collect(&tree);
        assert!(scopes.is_ignored(deep));
    }

    #[test]
    fn test_closures_and_blocks_are_local() {
        let mut tree = DeclTree::new();
        let root = tree.root();
        let c = tree.push(root, NodeKind::Closure);
        let in_closure = tree.push(c, NodeKind::Enum(TypeDecl::new("A")));
        let s = tree.push(root, NodeKind::Struct(TypeDecl::new("S")));
        let b = tree.push(s, NodeKind::Block);
        let in_block = tree.push(b, NodeKind::Enum(TypeDecl::new("B")));
        let member = tree.push(s, NodeKind::Enum(TypeDecl::new("C")));

        let scopes = LocalScopes::collect(&tree);
        assert!(scopes.is_ignored(in_closure));
        assert!(scopes.is_ignored(in_block));
        assert!(!scopes.is_ignored(member));
    }

    #[test]
    fn test_empty_tree() {
        let scopes = LocalScopes::collect(&DeclTree::new());
        assert!(scopes.is_empty());
    }
}
