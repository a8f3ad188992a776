use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AppError;

use super::resolver::{parse_catalog_data, resolve_pricing};
use super::types::PricingTable;

/// Local model catalog: model id -> pricing table
#[derive(Debug, Default)]
pub(crate) struct ModelCatalog {
    models: HashMap<String, PricingTable>,
}

impl ModelCatalog {
    pub(crate) fn from_json(content: &str, path: &Path) -> Result<Self, AppError> {
        let data: HashMap<String, serde_json::Value> =
            serde_json::from_str(content).map_err(|source| AppError::ParseInput {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self {
            models: parse_catalog_data(data),
        })
    }

    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    pub(crate) fn resolve(&self, model: &str) -> Option<&PricingTable> {
        resolve_pricing(model, &self.models)
    }

    pub(crate) fn len(&self) -> usize {
        self.models.len()
    }
}

/// Load a single pricing table file (native camelCase shape)
pub(crate) fn load_pricing_file(path: &Path) -> Result<PricingTable, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::ParseInput {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_json_and_resolve() {
        let catalog = ModelCatalog::from_json(
            r#"{
                "gpt-4o-mini": { "pricing": { "input": 0.15, "output": 0.6 } },
                "openai/gpt-4o": { "input_cost_per_token": 2.5e-6, "output_cost_per_token": 1e-5 }
            }"#,
            Path::new("catalog.json"),
        )
        .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.resolve("gpt-4o-mini").unwrap().output, Some(0.6));
        assert_eq!(catalog.resolve("gpt-4o").unwrap().input, Some(2.5));
        assert!(catalog.resolve("o3").is_none());
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = ModelCatalog::from_json("[1, 2]", Path::new("bad.json")).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = ModelCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, AppError::ReadInput { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }

    #[test]
    fn load_pricing_file_reads_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"input": 0.01, "cachedInput": 0.005, "writeCacheInput": 0.02}}"#).unwrap();
        let pricing = load_pricing_file(file.path()).unwrap();
        assert_eq!(pricing.input, Some(0.01));
        assert_eq!(pricing.cached_input, Some(0.005));
        assert_eq!(pricing.write_cache_input, Some(0.02));
        assert_eq!(pricing.output, None);
    }

    #[test]
    fn load_pricing_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_pricing_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ParseInput { .. }));
    }
}
