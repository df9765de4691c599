//! # nestgen
//!
//! **nestgen** is a schema-driven code generator: it reads one declarative
//! entity specification (a name, an ordered list of typed fields and an
//! identifier policy) and deterministically emits the five source artifacts of
//! a CRUD slice for a layered NestJS-style backend: request/response model,
//! validation schema, persistence-backed service, HTTP controller and wiring
//! module.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`spec`]** - Entity specification parsing and loading (JSON or YAML)
//! - **[`generator`]** - Normalization, field policy and artifact emission
//! - **[`cli`]** - Command-line entry point used by the `nestgen` binary
//!
//! ### Generation Flow
//!
//! ```text
//! Entity Spec → spec::load_entity_spec
//!            → generator::SemanticType / resolve_identifier  (canonical model)
//!            → generator::policy                             (per-artifact field sets)
//!            → generator::templates                          (Askama rendering)
//!            → generator::project                            (destination layout + writes)
//! ```
//!
//! Every run is a single-pass batch transformation: the canonical model is
//! recomputed fresh from the input document, the five artifacts are rendered
//! from it, and nothing persists between runs. Running the generator twice on
//! an unchanged specification produces byte-identical output.
//!
//! ## Usage
//!
//! ```bash
//! nestgen entity.json --output my-backend
//! ```
//!
//! ```rust,ignore
//! use nestgen::generator::generate_entity_module;
//!
//! # fn main() -> anyhow::Result<()> {
//! let generated = generate_entity_module("entity.json".as_ref(), ".".as_ref())?;
//! println!("wrote {} artifacts", generated.files.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod generator;
pub mod spec;

pub use spec::load_entity_spec;
