//! Structured request and response types, one pair per control-plane
//! action, serialized in wire (PascalCase) casing. These are the boundary
//! the surrounding dispatch framework parses into and serializes out of;
//! the backend never sees raw wire payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    DataCatalog, DataCatalogSummary, NamedQuery, PreparedStatement, QueryExecution,
    QueryExecutionContext, QueryResults, QueryRuntimeStatistics, ResultConfiguration, WorkGroup,
    WorkGroupConfiguration, WorkGroupSummary,
};

// ─── WorkGroups ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateWorkGroupInput {
    pub name: String,
    pub description: String,
    pub configuration: WorkGroupConfiguration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkGroupOutput {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWorkGroupInput {
    pub work_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWorkGroupOutput {
    pub work_group: WorkGroup,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListWorkGroupsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListWorkGroupsOutput {
    pub work_groups: Vec<WorkGroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteWorkGroupInput {
    pub work_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recursive_delete_option: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteWorkGroupOutput {}

// ─── Data Catalogs ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDataCatalogInput {
    pub name: String,
    #[serde(rename = "Type")]
    pub catalog_type: String,
    pub description: String,
    pub parameters: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDataCatalogOutput {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataCatalogInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDataCatalogOutput {
    pub data_catalog: DataCatalog,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDataCatalogsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDataCatalogsOutput {
    pub data_catalogs_summary: Vec<DataCatalogSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ─── Named Queries ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNamedQueryInput {
    pub name: String,
    pub database: String,
    pub query_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateNamedQueryOutput {
    pub named_query_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNamedQueryInput {
    pub named_query_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNamedQueryOutput {
    pub named_query: NamedQuery,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListNamedQueriesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListNamedQueriesOutput {
    pub named_query_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ─── Prepared Statements ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePreparedStatementInput {
    pub statement_name: String,
    pub work_group: String,
    pub query_statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePreparedStatementOutput {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPreparedStatementInput {
    pub statement_name: String,
    pub work_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPreparedStatementOutput {
    pub prepared_statement: PreparedStatement,
}

// ─── Query Executions ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StartQueryExecutionInput {
    pub query_string: String,
    pub query_execution_context: QueryExecutionContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_configuration: Option<ResultConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartQueryExecutionOutput {
    pub query_execution_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryExecutionInput {
    pub query_execution_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryExecutionOutput {
    pub query_execution: QueryExecution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopQueryExecutionInput {
    pub query_execution_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopQueryExecutionOutput {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryRuntimeStatisticsInput {
    pub query_execution_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryRuntimeStatisticsOutput {
    pub query_runtime_statistics: QueryRuntimeStatistics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListQueryExecutionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListQueryExecutionsOutput {
    pub query_execution_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ─── Query Results ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetQueryResultsInput {
    pub query_execution_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetQueryResultsOutput {
    pub result_set: ResultSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Wire shape of a result set: rows plus metadata-wrapped column info.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultSet {
    pub rows: Vec<crate::models::Row>,
    pub result_set_metadata: ResultSetMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResultSetMetadata {
    pub column_info: Vec<crate::models::ColumnInfo>,
}

impl From<QueryResults> for ResultSet {
    fn from(results: QueryResults) -> Self {
        Self {
            rows: results.rows,
            result_set_metadata: ResultSetMetadata {
                column_info: results.column_info,
            },
        }
    }
}
