//! # Generator Module
//!
//! The generator module turns a loaded [`crate::spec::EntitySpec`] into the
//! five artifacts of a CRUD slice.
//!
//! ## Architecture
//!
//! ```text
//! Entity Spec → Normalization → Field Policy → Template Rendering → Written Artifacts
//! ```
//!
//! 1. **Normalization** - [`SemanticType`]/[`zod_rule`] map free-form type
//!    tokens to one canonical semantic type and one validation rule;
//!    [`resolve_identifier`] derives the canonical identifier
//! 2. **Field Policy** - [`policy`] decides which fields each artifact renders
//!    and under what optionality
//! 3. **Template Rendering** - one Askama template per artifact
//!    (`templates/*.ts.txt`), filled from per-artifact context structs
//! 4. **Writing** - [`generate_entity_module`] resolves the destination
//!    layout and persists every artifact, overwriting unconditionally
//!
//! ## Generated Structure
//!
//! ```text
//! <output>/
//! └── src/
//!     ├── model/
//!     │   └── <name>.model.ts        # request/response DTOs (shared grouping)
//!     └── <name>/
//!         ├── <name>.validation.ts   # zod schemas
//!         ├── <name>.service.ts      # validate → persist → map
//!         ├── <name>.controller.ts   # five route handlers
//!         └── <name>.module.ts       # service + controller wiring
//! ```

mod ident;
pub mod policy;
mod project;
mod templates;
mod types;

pub use ident::*;
pub use project::*;
pub use templates::*;
pub use types::*;

/// Derived name forms for one entity, computed once per run and threaded into
/// every emitter so cross-references between artifacts resolve by
/// construction.
#[derive(Debug, Clone)]
pub struct NameForms {
    /// Capitalized form used for class names (`Buku`).
    pub pascal: String,
    /// lowerCamel form used for instance members (`buku`).
    pub camel: String,
    /// Lower-case form used for file names, import paths and the persistence
    /// delegate (`buku`).
    pub module: String,
}

impl NameForms {
    pub fn derive(name: &str) -> Self {
        let mut chars = name.chars();
        let pascal = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        let mut chars = name.chars();
        let camel = match chars.next() {
            Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
        Self {
            pascal,
            camel,
            module: name.to_lowercase(),
        }
    }
}
