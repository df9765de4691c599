use askama::Template;
use anyhow::Context;
use std::fs;
use std::path::Path;

use super::ident::{CanonicalIdentifier, IdType};
use super::policy;
use super::types::{zod_rule, CanonicalField};
use super::NameForms;

/// One rendered `name: type` pair for a model class body.
#[derive(Debug, Clone)]
pub struct TsField {
    pub name: String,
    pub ty: String,
}

/// One rendered `name: rule` pair for a validation schema body.
#[derive(Debug, Clone)]
pub struct ZodField {
    pub name: String,
    pub rule: String,
}

/// Template data for the request/response model artifact
#[derive(Template)]
#[template(path = "model.ts.txt", escape = "none")]
pub struct ModelTemplateData {
    pub pascal: String,
    pub id_ts: String,
    /// Whether the create DTO carries the identifier.
    pub include_id: bool,
    pub create_fields: Vec<TsField>,
    pub update_fields: Vec<TsField>,
    /// Deduplicated response body lines.
    pub response_lines: Vec<String>,
}

impl ModelTemplateData {
    pub fn new(names: &NameForms, id: &CanonicalIdentifier, fields: &[CanonicalField]) -> Self {
        let ts = |f: &&CanonicalField| TsField {
            name: f.name.clone(),
            ty: f.ts_type().to_string(),
        };
        Self {
            pascal: names.pascal.clone(),
            id_ts: id.ty.ts_name().to_string(),
            include_id: id.include_in_create,
            create_fields: policy::create_fields(fields).iter().map(ts).collect(),
            update_fields: policy::update_fields(fields).iter().map(ts).collect(),
            response_lines: policy::response_lines(id, fields),
        }
    }
}

/// Template data for the validation schema artifact
#[derive(Template)]
#[template(path = "validation.ts.txt", escape = "none")]
pub struct ValidationTemplateData {
    pub pascal: String,
    /// Create rules; the identifier rule is already prepended when the
    /// identifier is caller-supplied.
    pub create_fields: Vec<ZodField>,
    pub update_fields: Vec<ZodField>,
}

impl ValidationTemplateData {
    pub fn new(names: &NameForms, id: &CanonicalIdentifier, fields: &[CanonicalField]) -> Self {
        let mut create: Vec<ZodField> = policy::create_fields(fields)
            .iter()
            .map(|f| ZodField {
                name: f.name.clone(),
                rule: f.zod(true),
            })
            .collect();
        if id.include_in_create {
            create.insert(
                0,
                ZodField {
                    name: "id".to_string(),
                    rule: zod_rule(&id.raw_type, true),
                },
            );
        }
        let update = policy::update_fields(fields)
            .iter()
            .map(|f| ZodField {
                name: f.name.clone(),
                rule: f.zod(false),
            })
            .collect();
        Self {
            pascal: names.pascal.clone(),
            create_fields: create,
            update_fields: update,
        }
    }
}

/// Template data for the persistence-backed service artifact
#[derive(Template)]
#[template(path = "service.ts.txt", escape = "none")]
pub struct ServiceTemplateData {
    pub pascal: String,
    pub module: String,
    pub camel: String,
    pub id_ts: String,
    /// Non-identifier field names mapped into the response shape.
    pub response_map_fields: Vec<String>,
    /// Persisted-write set: every declared field, identifier included,
    /// mapped verbatim into the creation call.
    pub write_fields: Vec<String>,
    /// Non-identifier field names passed through on partial update.
    pub update_write_fields: Vec<String>,
    pub no_fields: bool,
}

impl ServiceTemplateData {
    pub fn new(
        names: &NameForms,
        id: &CanonicalIdentifier,
        fields: &[CanonicalField],
        declared: &[String],
    ) -> Self {
        Self {
            pascal: names.pascal.clone(),
            module: names.module.clone(),
            camel: names.camel.clone(),
            id_ts: id.ty.ts_name().to_string(),
            response_map_fields: fields.iter().map(|f| f.name.clone()).collect(),
            write_fields: declared.to_vec(),
            update_write_fields: fields.iter().map(|f| f.name.clone()).collect(),
            no_fields: declared.is_empty(),
        }
    }
}

/// Template data for the HTTP controller artifact
#[derive(Template)]
#[template(path = "controller.ts.txt", escape = "none")]
pub struct ControllerTemplateData {
    pub pascal: String,
    pub camel: String,
    pub module: String,
    /// Whether the identifier route parameter is parsed as a strict integer.
    pub id_is_number: bool,
    /// Full `@Param` definition for the identifier route parameter.
    pub id_param: String,
    pub no_fields: bool,
}

impl ControllerTemplateData {
    pub fn new(names: &NameForms, id: &CanonicalIdentifier, declared: &[String]) -> Self {
        let id_is_number = id.ty == IdType::Number;
        let id_param = if id_is_number {
            "@Param('id', ParseIntPipe) id: number".to_string()
        } else {
            format!("@Param('id') id: {}", id.ty.ts_name())
        };
        Self {
            pascal: names.pascal.clone(),
            camel: names.camel.clone(),
            module: names.module.clone(),
            id_is_number,
            id_param,
            no_fields: declared.is_empty(),
        }
    }
}

/// Template data for the wiring module artifact
#[derive(Template)]
#[template(path = "module.ts.txt", escape = "none")]
pub struct ModuleTemplateData {
    pub pascal: String,
    pub module: String,
    pub no_fields: bool,
}

impl ModuleTemplateData {
    pub fn new(names: &NameForms, declared: &[String]) -> Self {
        Self {
            pascal: names.pascal.clone(),
            module: names.module.clone(),
            no_fields: declared.is_empty(),
        }
    }
}

/// Render a template and persist it, overwriting unconditionally.
///
/// # Errors
///
/// Returns an error if rendering or the write fails; writes are not retried.
pub fn write_artifact<T: Template>(path: &Path, data: &T, label: &str) -> anyhow::Result<()> {
    let mut rendered = data
        .render()
        .with_context(|| format!("failed to render {label} artifact"))?;
    // rendering drops the template's final newline; artifacts end with one
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    fs::write(path, rendered).with_context(|| format!("failed to write {label} → {path:?}"))?;
    println!("✅ Generated {label}: {path:?}");
    Ok(())
}
