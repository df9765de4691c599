//! Field policy: which fields appear in which artifact, and under what
//! optionality.

use super::ident::CanonicalIdentifier;
use super::types::CanonicalField;

/// System-assigned audit timestamp fields, never caller-supplied on create.
pub const AUDIT_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

/// Create-payload rule: `required` is literally `true` and the name is not a
/// reserved audit field. Audit fields stay out of create payloads even when
/// declared required.
pub fn required_in_create(field: &CanonicalField) -> bool {
    field.required && !AUDIT_FIELDS.contains(&field.name.as_str())
}

/// Fields the create payload renders, in declared order.
pub fn create_fields(fields: &[CanonicalField]) -> Vec<&CanonicalField> {
    fields.iter().filter(|f| required_in_create(f)).collect()
}

/// Fields the update payload renders: every non-identifier field, always
/// optional (partial-update semantics).
pub fn update_fields(fields: &[CanonicalField]) -> Vec<&CanonicalField> {
    fields.iter().collect()
}

/// Response body lines: the identifier first, the declared fields in order,
/// then the two audit stamps. Deduplicated by exact text so the rendered
/// shape never carries the same line twice.
pub fn response_lines(id: &CanonicalIdentifier, fields: &[CanonicalField]) -> Vec<String> {
    let mut lines = vec![format!("id: {};", id.ty.ts_name())];
    for field in fields {
        lines.push(format!("{}: {};", field.name, field.ts_type()));
    }
    lines.push("createdAt: Date;".to_string());
    lines.push("updatedAt: Date;".to_string());
    unique_lines(lines)
}

/// Drop duplicate lines, keeping the first occurrence; blank entries are
/// discarded.
pub(crate) fn unique_lines(lines: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .filter(|l| seen.insert(l.clone()))
        .collect()
}
