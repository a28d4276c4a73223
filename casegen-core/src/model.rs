//! Generation model: what the analyzer hands to the renderer.
//!
//! The model is built fresh for every source unit and is read-only once
//! returned. Nothing here refers back into the declaration tree except the
//! [`NodeId`] identities carried by parent links.

use serde::{Deserialize, Serialize};

use crate::syntax::NodeId;

/// Modifiers that make a declaration invisible to a sibling file.
pub const FILE_LOCAL_MODIFIERS: &[&str] = &["fileprivate", "private"];

/// A generic parameter with its optional constraint, kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParameter {
    pub identifier: String,
    pub constraint: Option<String>,
}

impl GenericParameter {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            constraint: None,
        }
    }

    pub fn constrained(identifier: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            constraint: Some(constraint.into()),
        }
    }

    /// `T` or `T: Constraint`, as written in a generic parameter clause.
    pub fn declaration(&self) -> String {
        match &self.constraint {
            Some(constraint) => format!("{}: {}", self.identifier, constraint),
            None => self.identifier.clone(),
        }
    }
}

/// `Name` or `Name<A, B>` for one level of a qualified name.
fn generic_name(identifier: &str, generics: &[GenericParameter]) -> String {
    if generics.is_empty() {
        identifier.to_string()
    } else {
        let arguments: Vec<&str> = generics.iter().map(|g| g.identifier.as_str()).collect();
        format!("{}<{}>", identifier, arguments.join(", "))
    }
}

/// One enclosing container of a nested declaration.
///
/// Links form an owned chain from the innermost container outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    pub identity: NodeId,
    pub identifier: String,
    pub generics: Vec<GenericParameter>,
    pub parent: Option<Box<ParentLink>>,
}

impl ParentLink {
    pub fn new(identity: NodeId, identifier: impl Into<String>, generics: Vec<GenericParameter>) -> Self {
        Self {
            identity,
            identifier: identifier.into(),
            generics,
            parent: None,
        }
    }

    /// The chain as a sequence, outermost container first.
    pub fn outer_to_inner(&self) -> Vec<&ParentLink> {
        let mut links: Vec<&ParentLink> = std::iter::successors(Some(self), |l| l.parent.as_deref())
            .collect();
        links.reverse();
        links
    }

    /// Number of containers in the chain.
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |l| l.parent.as_deref()).count()
    }

    /// Generic parameters of every level, outermost first.
    pub fn all_generics(&self) -> Vec<GenericParameter> {
        self.outer_to_inner()
            .into_iter()
            .flat_map(|l| l.generics.iter().cloned())
            .collect()
    }

    /// `Outer<T>.Inner`, each level with its own generic arguments.
    pub fn path(&self) -> String {
        self.outer_to_inner()
            .into_iter()
            .map(|l| generic_name(&l.identifier, &l.generics))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// One associated value of a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseParameter {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

impl CaseParameter {
    pub fn unlabeled(ty: impl Into<String>) -> Self {
        Self {
            label: None,
            ty: ty.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub identifier: String,
    pub parameters: Vec<CaseParameter>,
}

impl CaseRecord {
    pub fn new(identifier: impl Into<String>, parameters: Vec<CaseParameter>) -> Self {
        Self {
            identifier: identifier.into(),
            parameters,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// An enum that case paths will be generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRecord {
    /// Declaration modifiers, `indirect` already removed
    pub modifiers: Vec<String>,
    pub identifier: String,
    pub generics: Vec<GenericParameter>,
    pub cases: Vec<CaseRecord>,
    pub parent_chain: Option<ParentLink>,
}

impl EnumRecord {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            identifier: identifier.into(),
            generics: Vec::new(),
            cases: Vec::new(),
            parent_chain: None,
        }
    }

    /// Generic parameters of all enclosing containers followed by the enum's own.
    pub fn all_generics(&self) -> Vec<GenericParameter> {
        let mut generics = self
            .parent_chain
            .as_ref()
            .map(ParentLink::all_generics)
            .unwrap_or_default();
        generics.extend(self.generics.iter().cloned());
        generics
    }

    /// Fully qualified name with per-level generic arguments: `Action<S>.Event`.
    pub fn full_name(&self) -> String {
        let own = generic_name(&self.identifier, &self.generics);
        match &self.parent_chain {
            Some(parent) => format!("{}.{}", parent.path(), own),
            None => own,
        }
    }

    /// Whether a modifier hides this enum from other files.
    pub fn is_file_local(&self) -> bool {
        self.modifiers
            .iter()
            .any(|m| FILE_LOCAL_MODIFIERS.contains(&m.as_str()))
    }

    /// Modifiers as they prefix each generated accessor.
    pub fn joined_modifiers(&self) -> String {
        self.modifiers.join(" ")
    }
}

/// Everything the renderer needs for one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationModel {
    pub imports: Vec<String>,
    pub enums: Vec<EnumRecord>,
}

impl GenerationModel {
    /// True when at least one enum would produce accessors.
    pub fn has_cases(&self) -> bool {
        self.enums.iter().any(|e| !e.cases.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::DeclTree;

    fn ids(count: usize) -> Vec<NodeId> {
        let mut tree = DeclTree::new();
        let root = tree.root();
        (0..count)
            .map(|_| tree.push(root, crate::syntax::NodeKind::Closure))
            .collect()
    }

    fn chain() -> ParentLink {
        // Action<Subaction: Equatable> > Screen > State<Value>
        let ids = ids(3);
        let action = ParentLink::new(
            ids[0],
            "Action",
            vec![GenericParameter::constrained("Subaction", "Equatable")],
        );
        let mut screen = ParentLink::new(ids[1], "Screen", vec![]);
        screen.parent = Some(Box::new(action));
        let mut state = ParentLink::new(ids[2], "State", vec![GenericParameter::new("Value")]);
        state.parent = Some(Box::new(screen));
        state
    }

    #[test]
    fn test_generic_parameter_declaration() {
        assert_eq!(GenericParameter::new("T").declaration(), "T");
        assert_eq!(
            GenericParameter::constrained("T", "Equatable & Hashable").declaration(),
            "T: Equatable & Hashable"
        );
    }

    #[test]
    fn test_parent_chain_order_and_depth() {
        let state = chain();
        assert_eq!(state.depth(), 3);
        let names: Vec<&str> = state
            .outer_to_inner()
            .iter()
            .map(|l| l.identifier.as_str())
            .collect();
        assert_eq!(names, vec!["Action", "Screen", "State"]);
        assert_eq!(state.path(), "Action<Subaction>.Screen.State<Value>");
    }

    #[test]
    fn test_all_generics_outer_first() {
        let mut record = EnumRecord::new("Event");
        record.generics = vec![GenericParameter::new("E")];
        record.parent_chain = Some(chain());
        let names: Vec<String> = record
            .all_generics()
            .into_iter()
            .map(|g| g.identifier)
            .collect();
        assert_eq!(names, vec!["Subaction", "Value", "E"]);
        assert_eq!(
            record.full_name(),
            "Action<Subaction>.Screen.State<Value>.Event<E>"
        );
    }

    #[test]
    fn test_top_level_names() {
        let mut record = EnumRecord::new("Example");
        assert_eq!(record.full_name(), "Example");
        assert!(record.all_generics().is_empty());
        record.generics = vec![GenericParameter::new("T1"), GenericParameter::new("T2")];
        assert_eq!(record.full_name(), "Example<T1, T2>");
    }

    #[test]
    fn test_file_local_detection() {
        let mut record = EnumRecord::new("E");
        record.modifiers = vec!["public".into()];
        assert!(!record.is_file_local());
        record.modifiers = vec!["fileprivate".into()];
        assert!(record.is_file_local());
        record.modifiers = vec!["private".into()];
        assert!(record.is_file_local());
    }

    #[test]
    fn test_has_cases() {
        let mut model = GenerationModel::default();
        assert!(!model.has_cases());
        model.enums.push(EnumRecord::new("Empty"));
        assert!(!model.has_cases());
        model.enums[0].cases.push(CaseRecord::new("a", vec![]));
        assert!(model.has_cases());
    }
}
