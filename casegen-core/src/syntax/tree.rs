//! Arena-backed declaration tree.
//!
//! Nodes are stored in a flat `Vec` and addressed by [`NodeId`], so identities
//! are stable for the life of the tree and cheap to use as map keys. Children
//! are kept in source order. A tree is only ever appended to; the analyzer
//! reads it and never mutates it.

use serde::{Deserialize, Serialize};

/// Stable identity of a node inside one [`DeclTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A generic parameter as written at the declaration site: `T` or `T: Equatable`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericParamDecl {
    pub name: String,
    /// Inherited type text, verbatim (`Equatable & Hashable`)
    pub inherited_type: Option<String>,
}

impl GenericParamDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inherited_type: None,
        }
    }

    pub fn constrained(name: impl Into<String>, inherited_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inherited_type: Some(inherited_type.into()),
        }
    }
}

/// Shape shared by enum, class and struct declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeDecl {
    /// Modifier keywords in source order (`public`, `indirect`, `private(set)`)
    pub modifiers: Vec<String>,
    pub identifier: String,
    pub generics: Vec<GenericParamDecl>,
}

impl TypeDecl {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_generics(mut self, generics: Vec<GenericParamDecl>) -> Self {
        self.generics = generics;
        self
    }
}

/// One entry of an associated-value list: `label: Type = default`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssociatedValue {
    pub label: Option<String>,
    pub ty: String,
    pub default_value: Option<String>,
}

impl AssociatedValue {
    pub fn unlabeled(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn labeled(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ty: ty.into(),
            default_value: None,
        }
    }
}

/// One element of a `case` declaration (`case b, c(Int)` has two).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseElement {
    pub identifier: String,
    pub associated_values: Vec<AssociatedValue>,
}

impl CaseElement {
    pub fn new(identifier: impl Into<String>, associated_values: Vec<AssociatedValue>) -> Self {
        Self {
            identifier: identifier.into(),
            associated_values,
        }
    }
}

/// Kind tag of a declaration node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a parse unit
    SourceFile,
    Import {
        text: String,
    },
    Enum(TypeDecl),
    Case {
        elements: Vec<CaseElement>,
    },
    Class(TypeDecl),
    Struct(TypeDecl),
    Extension {
        modifiers: Vec<String>,
        extended_type: String,
    },
    /// `func`, `init`, `deinit` and `subscript` declarations
    Function {
        identifier: String,
    },
    /// Braces in expression position
    Closure,
    /// Braced statement or accessor block (`if`, `do`, `get`, computed property)
    Block,
}

impl NodeKind {
    /// Enum, class or struct: the kinds that can be nested inside a container.
    pub fn is_nominal_type(&self) -> bool {
        matches!(self, Self::Enum(_) | Self::Class(_) | Self::Struct(_))
    }

    /// Declarations below a node of this kind have no externally addressable name.
    pub fn opens_local_scope(&self) -> bool {
        matches!(self, Self::Function { .. } | Self::Closure | Self::Block)
    }

    /// Short human-readable tag, used in logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SourceFile => "source-file",
            Self::Import { .. } => "import",
            Self::Enum(_) => "enum",
            Self::Case { .. } => "case",
            Self::Class(_) => "class",
            Self::Struct(_) => "struct",
            Self::Extension { .. } => "extension",
            Self::Function { .. } => "function",
            Self::Closure => "closure",
            Self::Block => "block",
        }
    }
}

/// A node of the declaration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclNode {
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

/// Declaration tree for one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclTree {
    nodes: Vec<DeclNode>,
}

impl Default for DeclTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclTree {
    /// Creates a tree holding only the `SourceFile` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![DeclNode {
                kind: NodeKind::SourceFile,
                children: Vec::new(),
            }],
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a node as the last child of `parent` and returns its identity.
    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(DeclNode {
            kind,
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Pre-order iterator over the descendants of `id` (not including `id`).
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }
}

/// Iterator returned by [`DeclTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a DeclTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = DeclTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.kind(tree.root()), &NodeKind::SourceFile);
    }

    #[test]
    fn test_push_keeps_child_order() {
        let mut tree = DeclTree::new();
        let root = tree.root();
        let a = tree.push(root, NodeKind::Struct(TypeDecl::new("A")));
        let b = tree.push(root, NodeKind::Struct(TypeDecl::new("B")));
        assert_eq!(tree.children(root), &[a, b]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let mut tree = DeclTree::new();
        let root = tree.root();
        let a = tree.push(root, NodeKind::Struct(TypeDecl::new("A")));
        let a_enum = tree.push(a, NodeKind::Enum(TypeDecl::new("E")));
        let a_case = tree.push(
            a_enum,
            NodeKind::Case {
                elements: vec![CaseElement::new("none", vec![])],
            },
        );
        let b = tree.push(root, NodeKind::Struct(TypeDecl::new("B")));

        let order: Vec<NodeId> = tree.descendants(root).collect();
        assert_eq!(order, vec![a, a_enum, a_case, b]);

        let below_a: Vec<NodeId> = tree.descendants(a).collect();
        assert_eq!(below_a, vec![a_enum, a_case]);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(NodeKind::Enum(TypeDecl::new("E")).is_nominal_type());
        assert!(!NodeKind::Extension {
            modifiers: vec![],
            extended_type: "A".into()
        }
        .is_nominal_type());
        assert!(NodeKind::Closure.opens_local_scope());
        assert!(NodeKind::Block.opens_local_scope());
        assert!(!NodeKind::Class(TypeDecl::new("C")).opens_local_scope());
    }
}
