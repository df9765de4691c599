use super::types::EntitySpec;
use anyhow::Context;
use std::path::Path;

/// Load an entity specification from a JSON or YAML document.
///
/// The format is decided by file extension (`.yaml`/`.yml` → YAML, anything
/// else → JSON). The document is parsed and checked in full before the caller
/// gets a chance to write any output, so a malformed document aborts a run
/// with nothing on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the document does not parse,
/// or the entity name is empty.
pub fn load_entity_spec(path: &Path) -> anyhow::Result<EntitySpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read entity spec {path:?}"))?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);
    let spec: EntitySpec = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse entity spec {path:?}"))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse entity spec {path:?}"))?
    };
    if spec.name.is_empty() {
        anyhow::bail!("entity spec {path:?} has an empty entity name");
    }
    Ok(spec)
}
