use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    query_state, statement_type, QueryExecution, QueryExecutionContext, QueryExecutionStatistics,
    QueryExecutionStatus, QueryRuntimeStatistics, ResultConfiguration, ResultReuseConfiguration,
};

/// Query execution lifecycle engine for one scope.
///
/// Executions complete instantly: a started query is stamped SUCCEEDED with
/// submission and completion times set together. The only transition after
/// that is to CANCELLED via [`stop`](Self::stop).
#[derive(Default)]
pub struct ExecutionEngine {
    executions: HashMap<String, QueryExecution>,
    // creation order, for listings
    order: Vec<String>,
}

impl ExecutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an execution and return its id. The caller has already
    /// validated the workgroup reference.
    pub fn start(
        &mut self,
        query: &str,
        context: QueryExecutionContext,
        result_configuration: Option<ResultConfiguration>,
        execution_parameters: Option<Vec<String>>,
        work_group: Option<String>,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let mut result_configuration = result_configuration.unwrap_or_default();
        if let Some(location) = result_configuration.output_location.take() {
            result_configuration.output_location = Some(derive_output_location(&location, &id));
        }

        let now = Utc::now();
        let execution = QueryExecution {
            query_execution_id: id.clone(),
            query: query.to_string(),
            statement_type: derive_statement_type(query).to_string(),
            result_configuration,
            result_reuse_configuration: ResultReuseConfiguration::default(),
            query_execution_context: context,
            status: QueryExecutionStatus {
                state: query_state::SUCCEEDED.to_string(),
                submission_date_time: now,
                completion_date_time: Some(now),
                state_change_reason: None,
            },
            statistics: QueryExecutionStatistics::default(),
            execution_parameters,
            work_group,
        };

        info!(id = %id, "started query execution");
        self.order.push(id.clone());
        self.executions.insert(id.clone(), execution);
        id
    }

    pub fn get(&self, id: &str) -> ApiResult<&QueryExecution> {
        self.executions
            .get(id)
            .ok_or_else(|| ApiError::query_execution_missing(id))
    }

    /// Cancel an execution. Safe to call on an already-terminal execution;
    /// the CANCELLED state and a fresh completion time are re-applied.
    pub fn stop(&mut self, id: &str) -> ApiResult<()> {
        let execution = self
            .executions
            .get_mut(id)
            .ok_or_else(|| ApiError::query_execution_missing(id))?;
        debug!(id, "cancelling query execution");
        execution.status.state = query_state::CANCELLED.to_string();
        execution.status.completion_date_time = Some(Utc::now());
        execution.status.state_change_reason = Some("Query cancelled by user".to_string());
        Ok(())
    }

    /// Placeholder runtime statistics; the execution must exist.
    pub fn runtime_statistics(&self, id: &str) -> ApiResult<QueryRuntimeStatistics> {
        self.get(id)?;
        Ok(QueryRuntimeStatistics::default())
    }

    /// Execution ids in creation order, optionally restricted to those
    /// started under the given workgroup. A non-matching filter yields an
    /// empty list, not an error.
    pub fn ids(&self, work_group: Option<&str>) -> Vec<String> {
        match work_group {
            None => self.order.clone(),
            Some(wg) => self
                .order
                .iter()
                .filter(|id| {
                    self.executions
                        .get(*id)
                        .and_then(|e| e.work_group.as_deref())
                        .map(|owner| owner == wg)
                        .unwrap_or(false)
                })
                .cloned()
                .collect(),
        }
    }
}

/// Append `{id}.csv` to the configured output location, inserting a
/// separator only when the location does not already end in one.
fn derive_output_location(location: &str, id: &str) -> String {
    if location.ends_with('/') {
        format!("{location}{id}.csv")
    } else {
        format!("{location}/{id}.csv")
    }
}

/// Classify the query text. Anything unrecognized is DML.
fn derive_statement_type(query: &str) -> &'static str {
    let head = query
        .trim_start()
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_uppercase();
    match head.as_str() {
        "CREATE" | "ALTER" | "DROP" => statement_type::DDL,
        "DESCRIBE" | "SHOW" | "EXPLAIN" => statement_type::UTILITY,
        _ => statement_type::DML,
    }
}
