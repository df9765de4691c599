use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::ident::resolve_identifier;
use super::templates::{
    write_artifact, ControllerTemplateData, ModelTemplateData, ModuleTemplateData,
    ServiceTemplateData, ValidationTemplateData,
};
use super::types::CanonicalField;
use super::NameForms;
use crate::spec::{load_entity_spec, EntitySpec};

/// Destinations of one completed generation run.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    /// Entity-specific grouping (`src/<name>/`).
    pub entity_dir: PathBuf,
    /// Shared model grouping (`src/model/`).
    pub model_dir: PathBuf,
    /// The five artifact paths, in write order.
    pub files: Vec<PathBuf>,
}

/// Generate the full CRUD slice for the entity described at `spec_path`,
/// writing under `out_root`.
///
/// The document is parsed in full before the first write, so a malformed
/// specification aborts with nothing on disk. A crash mid-run may still leave
/// a partial artifact set; there is no rollback.
pub fn generate_entity_module(spec_path: &Path, out_root: &Path) -> anyhow::Result<GeneratedModule> {
    let spec = load_entity_spec(spec_path)?;
    generate_from_spec(&spec, out_root)
}

/// Generate all five artifacts from an already-parsed specification.
///
/// Every derived model is recomputed fresh from `spec`; two runs over the
/// same specification produce byte-identical artifacts. Destination
/// groupings are created when absent and artifacts are overwritten
/// unconditionally: no merge, no diffing, last write wins.
pub fn generate_from_spec(spec: &EntitySpec, out_root: &Path) -> anyhow::Result<GeneratedModule> {
    let names = NameForms::derive(&spec.name);
    let id = resolve_identifier(spec);
    let fields: Vec<CanonicalField> = spec.data_fields().map(CanonicalField::from_spec).collect();
    let declared: Vec<String> = spec.fields.iter().map(|f| f.name.clone()).collect();

    let entity_dir = out_root.join("src").join(&names.module);
    let model_dir = out_root.join("src").join("model");
    fs::create_dir_all(&entity_dir)
        .with_context(|| format!("failed to create entity directory {entity_dir:?}"))?;
    fs::create_dir_all(&model_dir)
        .with_context(|| format!("failed to create model directory {model_dir:?}"))?;

    let model_path = model_dir.join(format!("{}.model.ts", names.module));
    let validation_path = entity_dir.join(format!("{}.validation.ts", names.module));
    let service_path = entity_dir.join(format!("{}.service.ts", names.module));
    let controller_path = entity_dir.join(format!("{}.controller.ts", names.module));
    let module_path = entity_dir.join(format!("{}.module.ts", names.module));

    write_artifact(&model_path, &ModelTemplateData::new(&names, &id, &fields), "model")?;
    write_artifact(
        &validation_path,
        &ValidationTemplateData::new(&names, &id, &fields),
        "validation",
    )?;
    write_artifact(
        &service_path,
        &ServiceTemplateData::new(&names, &id, &fields, &declared),
        "service",
    )?;
    write_artifact(
        &controller_path,
        &ControllerTemplateData::new(&names, &id, &declared),
        "controller",
    )?;
    write_artifact(&module_path, &ModuleTemplateData::new(&names, &declared), "module")?;

    Ok(GeneratedModule {
        entity_dir,
        model_dir,
        files: vec![
            model_path,
            validation_path,
            service_path,
            controller_path,
            module_path,
        ],
    })
}
