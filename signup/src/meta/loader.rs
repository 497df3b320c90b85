use std::path::Path;

use super::Catalog;
use crate::util::Result;

impl Catalog {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Reads a catalog file such as `metadata/catalog.yaml`.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)?;
    let catalog = Catalog::from_yaml_str(&text)?;
    tracing::debug!(
        "Loaded catalog from {}: {} plans, {} add-ons",
        path.display(),
        catalog.plans.len(),
        catalog.addons.len()
    );
    Ok(catalog)
}
