//! Entity specification parsing and loading.
//!
//! An entity specification is one document per generator invocation describing
//! the entity's name, its ordered field list and an optional identifier
//! configuration. Documents are accepted as JSON or YAML, decided by file
//! extension.

mod load;
mod types;

pub use load::*;
pub use types::*;
