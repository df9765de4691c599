use serde::Deserialize;

/// One entity specification document.
///
/// `fields` keeps its declared order; that order is preserved in every
/// emitted artifact. A field named `id` is not treated as a data field; it
/// is folded into the identifier configuration instead (see
/// [`crate::generator::resolve_identifier`]).
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySpec {
    /// Entity name; all derived name forms come from this.
    pub name: String,
    /// Declared fields in document order.
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    /// Explicit identifier configuration. Takes priority over a field named
    /// `id`.
    #[serde(default)]
    pub id: Option<IdSpec>,
}

/// One declared field of an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    /// Free-form type token (`"int"`, `"uuid"`, `"datetime"`, ...). Absent
    /// means the string type.
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Identifier strategy; only meaningful on a field named `id`, where the
    /// field doubles as the identifier configuration.
    #[serde(default)]
    pub strategy: Option<String>,
}

/// Identifier configuration, either declared as an explicit `id` block or
/// derived from a field named `id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdSpec {
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    /// `"autoincrement"` / `"auto"` mark the value as assigned by the
    /// persistence layer; anything else leaves it caller-supplied.
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl From<&FieldSpec> for IdSpec {
    fn from(field: &FieldSpec) -> Self {
        IdSpec {
            ty: field.ty.clone(),
            strategy: field.strategy.clone(),
            required: field.required,
        }
    }
}

impl EntitySpec {
    /// The identifier source, with explicit `id` block taking priority over a
    /// field named `id`. `None` when neither exists.
    pub fn id_source(&self) -> Option<IdSpec> {
        self.id
            .clone()
            .or_else(|| self.fields.iter().find(|f| f.name == "id").map(IdSpec::from))
    }

    /// Declared fields excluding the identifier, in document order.
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.name != "id")
    }
}
