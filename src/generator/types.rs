use crate::spec::FieldSpec;

/// Canonical semantic type of a field, resolved case-insensitively from a
/// free-form type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    String,
    Number,
    Boolean,
    Date,
    Any,
}

impl SemanticType {
    /// Resolve a raw type token. Unrecognized tokens resolve to [`Self::Any`];
    /// an *absent* token never reaches this function because the
    /// field/identifier default path substitutes `"string"` first.
    pub fn resolve(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "int" | "integer" | "float" | "number" => Self::Number,
            "string" | "uuid" => Self::String,
            "boolean" | "bool" => Self::Boolean,
            "date" | "datetime" => Self::Date,
            _ => Self::Any,
        }
    }

    /// The TypeScript rendering of this semantic type.
    pub fn ts_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::Any => "any",
        }
    }
}

/// Build the zod validation rule for a raw type token.
///
/// The rule shape agrees with [`SemanticType::resolve`] for every token: a
/// token resolving to the numeric semantic type gets a number rule, and so
/// on. `int`/`integer` additionally carry the `.int()` refinement; `uuid`
/// carries `.uuid()`; `date`/`datetime` accept an ISO-8601 string and coerce
/// it. Non-required rules are wrapped with `.optional()`.
pub fn zod_rule(token: &str, required: bool) -> String {
    let base = match token.to_ascii_lowercase().as_str() {
        "string" => "z.string()",
        "uuid" => "z.string().uuid()",
        "number" | "float" => "z.number()",
        "int" | "integer" => "z.number().int()",
        "boolean" | "bool" => "z.boolean()",
        "date" | "datetime" => "z.string().datetime().pipe(z.coerce.date())",
        _ => "z.any()",
    };
    if required {
        base.to_string()
    } else {
        format!("{base}.optional()")
    }
}

/// A field after type and validation-shape resolution. The non-identifier
/// sequence of these preserves the declared field order.
#[derive(Debug, Clone)]
pub struct CanonicalField {
    pub name: String,
    /// The raw token with the absent-token default of `"string"` applied.
    pub raw_type: String,
    pub semantic: SemanticType,
    pub required: bool,
}

impl CanonicalField {
    pub fn from_spec(field: &FieldSpec) -> Self {
        let raw = field.ty.clone().unwrap_or_else(|| "string".to_string());
        Self {
            name: field.name.clone(),
            semantic: SemanticType::resolve(&raw),
            raw_type: raw,
            required: field.required,
        }
    }

    pub fn ts_type(&self) -> &'static str {
        self.semantic.ts_name()
    }

    /// The zod rule for this field under the given optionality.
    pub fn zod(&self, required: bool) -> String {
        zod_rule(&self.raw_type, required)
    }
}
