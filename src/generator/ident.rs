use crate::spec::EntitySpec;

/// Identifier semantic type. Narrower than [`super::SemanticType`]: only the
/// `int`/`integer`/`number` tokens resolve to [`IdType::Number`], while
/// `float` and everything else stays [`IdType::String`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdType {
    String,
    Number,
}

impl IdType {
    pub fn ts_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// The canonical identifier derived for one entity. Exactly one exists per
/// run, even when the specification declares no identifier at all.
#[derive(Debug, Clone)]
pub struct CanonicalIdentifier {
    pub ty: IdType,
    /// Lower-cased raw token, defaulted to `"string"`; used for the create
    /// schema's identifier rule.
    pub raw_type: String,
    /// Whether the caller supplies the identifier on creation.
    pub include_in_create: bool,
}

/// Derive the canonical identifier for an entity.
///
/// Source priority: explicit `id` block, then a field named `id`, then
/// absent (string identifier, excluded from the create payload).
///
/// `include_in_create` is a strict three-way AND: an identifier source
/// exists, its strategy is not `autoincrement`/`auto` (case-insensitive),
/// and `required` is literally `true`. An absent strategy neither implies
/// auto-generation nor forces inclusion on its own.
pub fn resolve_identifier(spec: &EntitySpec) -> CanonicalIdentifier {
    let Some(source) = spec.id_source() else {
        return CanonicalIdentifier {
            ty: IdType::String,
            raw_type: "string".to_string(),
            include_in_create: false,
        };
    };

    let raw = source
        .ty
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_else(|| "string".to_string());
    let ty = match raw.as_str() {
        "int" | "integer" | "number" => IdType::Number,
        _ => IdType::String,
    };
    let auto_assigned = source
        .strategy
        .map(|s| {
            let s = s.to_ascii_lowercase();
            s == "autoincrement" || s == "auto"
        })
        .unwrap_or(false);

    CanonicalIdentifier {
        ty,
        raw_type: raw,
        include_in_create: !auto_assigned && source.required,
    }
}
