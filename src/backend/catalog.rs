use std::collections::HashMap;

use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{DataCatalog, DataCatalogSummary};

/// Data catalog store for one scope. Names are unique; records are kept in
/// creation order.
#[derive(Default)]
pub struct DataCatalogStore {
    catalogs: Vec<DataCatalog>,
}

impl DataCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        name: &str,
        catalog_type: &str,
        description: &str,
        parameters: HashMap<String, String>,
    ) -> ApiResult<()> {
        if self.catalogs.iter().any(|dc| dc.name == name) {
            return Err(ApiError::data_catalog_exists());
        }
        debug!(name, catalog_type, "creating data catalog");
        self.catalogs.push(DataCatalog {
            name: name.to_string(),
            catalog_type: catalog_type.to_string(),
            description: description.to_string(),
            parameters,
        });
        Ok(())
    }

    pub fn get(&self, name: &str) -> ApiResult<&DataCatalog> {
        self.catalogs
            .iter()
            .find(|dc| dc.name == name)
            .ok_or_else(ApiError::data_catalog_missing)
    }

    /// Listing entries carry name and type only.
    pub fn summaries(&self) -> Vec<DataCatalogSummary> {
        self.catalogs
            .iter()
            .map(|dc| DataCatalogSummary {
                catalog_name: dc.name.clone(),
                catalog_type: dc.catalog_type.clone(),
            })
            .collect()
    }
}
