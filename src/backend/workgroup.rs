use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{WorkGroup, WorkGroupConfiguration, WorkGroupSummary};

/// The always-present default workgroup.
pub const PRIMARY_WORK_GROUP: &str = "primary";

/// Registry of workgroups for one scope.
///
/// `"primary"` is created at construction with the stock configuration and
/// can never be replaced or deleted. Records are kept in creation order so
/// listings are stable.
pub struct WorkGroupRegistry {
    groups: Vec<WorkGroup>,
}

impl WorkGroupRegistry {
    pub fn new() -> Self {
        Self {
            groups: vec![WorkGroup::new(
                PRIMARY_WORK_GROUP,
                "",
                WorkGroupConfiguration::default(),
            )],
        }
    }

    /// Create a workgroup, merging the caller's configuration over the
    /// defaults. Duplicate names (including `"primary"`) are rejected.
    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        configuration: WorkGroupConfiguration,
    ) -> ApiResult<()> {
        if self.contains(name) {
            return Err(ApiError::work_group_exists());
        }
        debug!(name, "creating workgroup");
        self.groups
            .push(WorkGroup::new(name, description, configuration));
        Ok(())
    }

    pub fn get(&self, name: &str) -> ApiResult<&WorkGroup> {
        self.groups
            .iter()
            .find(|wg| wg.name == name)
            .ok_or_else(ApiError::work_group_missing)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.iter().any(|wg| wg.name == name)
    }

    /// Delete a workgroup. `"primary"` is protected; absent names fail with
    /// `NotFound` to keep the contract symmetric with `get`.
    pub fn delete(&mut self, name: &str) -> ApiResult<()> {
        if name == PRIMARY_WORK_GROUP {
            return Err(ApiError::primary_work_group_protected());
        }
        let idx = self
            .groups
            .iter()
            .position(|wg| wg.name == name)
            .ok_or_else(ApiError::work_group_missing)?;
        debug!(name, "deleting workgroup");
        self.groups.remove(idx);
        Ok(())
    }

    /// All workgroups in creation order, `"primary"` first.
    pub fn summaries(&self) -> Vec<WorkGroupSummary> {
        self.groups
            .iter()
            .map(|wg| WorkGroupSummary {
                name: wg.name.clone(),
                state: wg.state.clone(),
                description: wg.description.clone(),
                creation_time: wg.creation_time,
            })
            .collect()
    }
}

impl Default for WorkGroupRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_exists_with_default_configuration() {
        let registry = WorkGroupRegistry::new();
        let primary = registry.get(PRIMARY_WORK_GROUP).unwrap();
        assert_eq!(primary.configuration, WorkGroupConfiguration::default());
        assert!(!primary.configuration.enforce_work_group_configuration);
        assert_eq!(
            primary.configuration.engine_version.effective_engine_version,
            "Athena engine version 3"
        );
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = WorkGroupRegistry::new();
        registry
            .create("etl", "", WorkGroupConfiguration::default())
            .unwrap();
        let err = registry
            .create("etl", "again", WorkGroupConfiguration::default())
            .unwrap_err();
        assert_eq!(err.message, "WorkGroup already exists");
    }

    #[test]
    fn primary_cannot_be_created_or_deleted() {
        let mut registry = WorkGroupRegistry::new();
        assert!(registry
            .create(PRIMARY_WORK_GROUP, "", WorkGroupConfiguration::default())
            .is_err());
        assert!(registry.delete(PRIMARY_WORK_GROUP).is_err());
        assert!(registry.contains(PRIMARY_WORK_GROUP));
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut registry = WorkGroupRegistry::new();
        let err = registry.delete("ghost").unwrap_err();
        assert_eq!(err.message, "WorkGroup does not exist");
    }
}
