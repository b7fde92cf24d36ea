use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── WorkGroups ─────────────────────────────────────────────────────────────

/// A workgroup record as stored in the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkGroup {
    pub name: String,
    pub state: String,
    pub configuration: WorkGroupConfiguration,
    pub description: String,
    pub creation_time: DateTime<Utc>,
}

impl WorkGroup {
    pub fn new(name: &str, description: &str, configuration: WorkGroupConfiguration) -> Self {
        Self {
            name: name.to_string(),
            state: work_group_state::ENABLED.to_string(),
            configuration,
            description: description.to_string(),
            creation_time: Utc::now(),
        }
    }
}

/// Workgroup state values.
pub mod work_group_state {
    pub const ENABLED: &str = "ENABLED";
    pub const DISABLED: &str = "DISABLED";
}

/// Resolved workgroup configuration.
///
/// Callers supply a partial configuration; `#[serde(default)]` (for wire
/// input) or struct-update syntax over [`Default`] (for programmatic input)
/// fills the unset keys with the service defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorkGroupConfiguration {
    pub result_configuration: ResultConfiguration,
    pub enforce_work_group_configuration: bool,
    pub publish_cloud_watch_metrics_enabled: bool,
    pub requester_pays_enabled: bool,
    pub engine_version: EngineVersion,
    pub enable_minimum_encryption_configuration: bool,
}

impl Default for WorkGroupConfiguration {
    fn default() -> Self {
        Self {
            result_configuration: ResultConfiguration::default(),
            enforce_work_group_configuration: false,
            publish_cloud_watch_metrics_enabled: false,
            requester_pays_enabled: false,
            engine_version: EngineVersion::default(),
            enable_minimum_encryption_configuration: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_configuration: Option<EncryptionConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionConfiguration {
    pub encryption_option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineVersion {
    pub selected_engine_version: String,
    pub effective_engine_version: String,
}

impl Default for EngineVersion {
    fn default() -> Self {
        Self {
            selected_engine_version: "AUTO".to_string(),
            effective_engine_version: "Athena engine version 3".to_string(),
        }
    }
}

/// Listing entry: name and state only, no configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkGroupSummary {
    pub name: String,
    pub state: String,
    pub description: String,
    pub creation_time: DateTime<Utc>,
}

// ─── Data Catalogs ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataCatalog {
    pub name: String,
    #[serde(rename = "Type")]
    pub catalog_type: String,
    pub description: String,
    pub parameters: HashMap<String, String>,
}

/// Catalog type values.
pub mod catalog_type {
    pub const GLUE: &str = "GLUE";
    pub const HIVE: &str = "HIVE";
    pub const LAMBDA: &str = "LAMBDA";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataCatalogSummary {
    pub catalog_name: String,
    #[serde(rename = "Type")]
    pub catalog_type: String,
}

// ─── Named Queries ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamedQuery {
    pub named_query_id: String,
    pub name: String,
    pub database: String,
    pub query_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub work_group: String,
}

impl NamedQuery {
    /// Create a named query with a generated id. An omitted workgroup files
    /// the query under `"primary"`, matching the service default.
    pub fn new(
        name: &str,
        database: &str,
        query_string: &str,
        description: Option<String>,
        work_group: Option<String>,
    ) -> Self {
        Self {
            named_query_id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            database: database.to_string(),
            query_string: query_string.to_string(),
            description,
            work_group: work_group.unwrap_or_else(|| "primary".to_string()),
        }
    }
}

// ─── Prepared Statements ────────────────────────────────────────────────────

/// Keyed by `(statement_name, work_group)`; names are reusable across
/// workgroups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreparedStatement {
    pub statement_name: String,
    pub query_statement: String,
    pub work_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub last_modified_time: DateTime<Utc>,
}

// ─── Query Executions ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryExecution {
    pub query_execution_id: String,
    pub query: String,
    pub statement_type: String,
    pub result_configuration: ResultConfiguration,
    pub result_reuse_configuration: ResultReuseConfiguration,
    pub query_execution_context: QueryExecutionContext,
    pub status: QueryExecutionStatus,
    pub statistics: QueryExecutionStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

/// Query execution state values.
pub mod query_state {
    pub const QUEUED: &str = "QUEUED";
    pub const RUNNING: &str = "RUNNING";
    pub const SUCCEEDED: &str = "SUCCEEDED";
    pub const FAILED: &str = "FAILED";
    pub const CANCELLED: &str = "CANCELLED";
}

/// Statement type values, derived from the query text.
pub mod statement_type {
    pub const DDL: &str = "DDL";
    pub const DML: &str = "DML";
    pub const UTILITY: &str = "UTILITY";
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryExecutionContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryExecutionStatus {
    pub state: String,
    pub submission_date_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_change_reason: Option<String>,
}

/// All-zero counters; the engine never scans data or measures time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryExecutionStatistics {
    pub engine_execution_time_in_millis: u64,
    pub data_scanned_in_bytes: u64,
    pub total_execution_time_in_millis: u64,
    pub query_queue_time_in_millis: u64,
    pub service_pre_processing_time_in_millis: u64,
    pub query_planning_time_in_millis: u64,
    pub service_processing_time_in_millis: u64,
    pub result_reuse_information: ResultReuseInformation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultReuseInformation {
    pub reused_previous_result: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultReuseConfiguration {
    pub result_reuse_by_age_configuration: ResultReuseByAgeConfiguration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultReuseByAgeConfiguration {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_in_minutes: Option<u32>,
}

/// Placeholder runtime-statistics envelope returned by
/// GetQueryRuntimeStatistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryRuntimeStatistics {
    pub timeline: QueryRuntimeStatisticsTimeline,
    pub rows: QueryRuntimeStatisticsRows,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryRuntimeStatisticsTimeline {
    pub query_queue_time_in_millis: u64,
    pub service_pre_processing_time_in_millis: u64,
    pub query_planning_time_in_millis: u64,
    pub engine_execution_time_in_millis: u64,
    pub service_processing_time_in_millis: u64,
    pub total_execution_time_in_millis: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryRuntimeStatisticsRows {
    pub input_rows: u64,
    pub input_bytes: u64,
    pub output_rows: u64,
    pub output_bytes: u64,
}

// ─── Query Results ──────────────────────────────────────────────────────────

/// A seeded result set: rows plus column metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResults {
    pub rows: Vec<Row>,
    pub column_info: Vec<ColumnInfo>,
}

impl QueryResults {
    pub fn new(rows: Vec<Row>, column_info: Vec<ColumnInfo>) -> Self {
        Self { rows, column_info }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Row {
    pub data: Vec<Datum>,
}

/// A single cell. Only string-valued cells are modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Datum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub var_char_value: Option<String>,
}

impl Datum {
    pub fn varchar(value: &str) -> Self {
        Self {
            var_char_value: Some(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColumnInfo {
    pub catalog_name: String,
    pub schema_name: String,
    pub table_name: String,
    pub name: String,
    pub label: String,
    #[serde(rename = "Type")]
    pub column_type: String,
    pub precision: i32,
    pub scale: i32,
    pub nullable: String,
    pub case_sensitive: bool,
}
