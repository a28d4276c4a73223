//! Case-path accessor rendering.
//!
//! Output layout for one unit:
//!
//! ```text
//! banner
//!
//! import A
//! import CasePaths
//!
//! extension CasePath where Root == First { ... }
//!
//! extension CasePath { ... }
//! ```
//!
//! Enums without generics anywhere in their chain get one static computed
//! property per case. Otherwise every accessor is a static generic function
//! constrained by `where Root == <full name>`. All text uses the canonical
//! two-space indentation unit.

use std::collections::BTreeSet;

use crate::model::{CaseRecord, EnumRecord, GenerationModel, GenericParameter};

pub const BANNER: &str = "//  The file is generated by casegen\n//\n//  Do not modify!";

/// Import every generated file needs.
pub const CASE_PATHS_IMPORT: &str = "import CasePaths";

/// Renders a whole generation model. Enums without cases are skipped.
pub fn render(model: &GenerationModel) -> String {
    let imports: BTreeSet<&str> = model
        .imports
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(CASE_PATHS_IMPORT))
        .collect();

    let mut enums: Vec<&EnumRecord> = model.enums.iter().filter(|e| !e.cases.is_empty()).collect();
    // full name breaks ties between same-named nested enums
    enums.sort_by_cached_key(|e| (e.identifier.clone(), e.full_name()));

    let mut sections = vec![
        BANNER.to_string(),
        imports.into_iter().collect::<Vec<_>>().join("\n"),
    ];
    sections.extend(enums.into_iter().map(render_enum));

    let mut output = sections.join("\n\n");
    output.push('\n');
    output
}

/// Renders the accessor extension for one enum.
pub fn render_enum(record: &EnumRecord) -> String {
    let generics = record.all_generics();
    let full_name = record.full_name();
    let prefix = modifier_prefix(record);

    let mut cases: Vec<&CaseRecord> = record.cases.iter().collect();
    cases.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    let (header, accessors): (String, Vec<String>) = if generics.is_empty() {
        (
            format!("extension CasePath where Root == {} {{", full_name),
            cases
                .iter()
                .map(|case| property_accessor(&prefix, case))
                .collect(),
        )
    } else {
        let clause = generic_clause(&generics);
        (
            "extension CasePath {".to_string(),
            cases
                .iter()
                .map(|case| function_accessor(&prefix, case, &clause, &full_name))
                .collect(),
        )
    };

    format!("{}\n{}\n}}", header, accessors.join("\n\n"))
}

fn modifier_prefix(record: &EnumRecord) -> String {
    if record.modifiers.is_empty() {
        String::new()
    } else {
        format!("{} ", record.joined_modifiers())
    }
}

fn generic_clause(generics: &[GenericParameter]) -> String {
    generics
        .iter()
        .map(GenericParameter::declaration)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Void`, the single payload type, or a positional tuple.
fn value_type(case: &CaseRecord) -> String {
    match case.parameters.as_slice() {
        [] => "Void".to_string(),
        [single] => single.ty.clone(),
        many => {
            let types: Vec<&str> = many.iter().map(|p| p.ty.as_str()).collect();
            format!("({})", types.join(", "))
        }
    }
}

fn property_accessor(prefix: &str, case: &CaseRecord) -> String {
    format!(
        "  {}static var {}: CasePath<Root, {}> {{\n{}\n  }}",
        prefix,
        case.identifier,
        value_type(case),
        accessor_body(case)
    )
}

fn function_accessor(prefix: &str, case: &CaseRecord, clause: &str, full_name: &str) -> String {
    format!(
        "  {}static func {}<{}>() -> CasePath<Root, {}>\n  where Root == {} {{\n{}\n  }}",
        prefix,
        case.identifier,
        clause,
        value_type(case),
        full_name,
        accessor_body(case)
    )
}

/// The `.init(embed:extract:)` expression shared by both accessor forms.
fn accessor_body(case: &CaseRecord) -> String {
    let name = &case.identifier;
    let (embed, pattern, extracted) = match case.parameters.as_slice() {
        [] => (format!(".{}", name), format!("case .{}", name), "()".to_string()),
        [single] => (
            format!(".{}({})", name, labeled(single.label.as_deref(), "$0")),
            format!("case let .{}(t0)", name),
            "t0".to_string(),
        ),
        many => {
            let arguments: Vec<String> = many
                .iter()
                .enumerate()
                .map(|(i, p)| labeled(p.label.as_deref(), &format!("$0.{}", i)))
                .collect();
            let bindings: Vec<String> = (0..case.arity()).map(|i| format!("t{}", i)).collect();
            let bindings = bindings.join(", ");
            (
                format!(".{}({})", name, arguments.join(", ")),
                format!("case let .{}({})", name, bindings),
                format!("({})", bindings),
            )
        }
    };

    [
        "    .init(".to_string(),
        format!("      embed: {{ {} }},", embed),
        "      extract: {".to_string(),
        format!("        guard {} = $0 else {{ return nil }}", pattern),
        format!("        return {}", extracted),
        "      }".to_string(),
        "    )".to_string(),
    ]
    .join("\n")
}

fn labeled(label: Option<&str>, value: &str) -> String {
    match label {
        Some(label) => format!("{}: {}", label, value),
        None => value.to_string(),
    }
}
