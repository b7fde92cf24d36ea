pub mod catalog;
pub mod execution;
pub mod paging;
pub mod query;
pub mod results;
pub mod workgroup;

use std::collections::HashMap;

use chrono::Utc;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    DataCatalog, DataCatalogSummary, NamedQuery, PreparedStatement, QueryExecution,
    QueryExecutionContext, QueryResults, QueryRuntimeStatistics, ResultConfiguration, WorkGroup,
    WorkGroupConfiguration, WorkGroupSummary,
};

use catalog::DataCatalogStore;
use execution::ExecutionEngine;
use paging::{paginate, Page};
use query::{NamedQueryStore, PreparedStatementStore};
use results::ResultStore;
use workgroup::{WorkGroupRegistry, PRIMARY_WORK_GROUP};

/// All control-plane state for one (account, region) scope.
///
/// Mutation is single-writer: callers serialize access through the
/// per-scope mutex handed out by
/// [`BackendRegistry`](crate::registry::BackendRegistry). Cross-store
/// checks (workgroup existence for executions and prepared statements)
/// live here rather than in the individual stores.
pub struct AthenaBackend {
    pub account_id: String,
    pub region: String,
    work_groups: WorkGroupRegistry,
    data_catalogs: DataCatalogStore,
    named_queries: NamedQueryStore,
    prepared_statements: PreparedStatementStore,
    executions: ExecutionEngine,
    results: ResultStore,
}

impl AthenaBackend {
    pub fn new(account_id: &str, region: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            region: region.to_string(),
            work_groups: WorkGroupRegistry::new(),
            data_catalogs: DataCatalogStore::new(),
            named_queries: NamedQueryStore::new(),
            prepared_statements: PreparedStatementStore::new(),
            executions: ExecutionEngine::new(),
            results: ResultStore::new(),
        }
    }

    // ─── WorkGroups ─────────────────────────────────────────────────────────

    pub fn create_work_group(
        &mut self,
        name: &str,
        description: &str,
        configuration: WorkGroupConfiguration,
    ) -> ApiResult<()> {
        self.work_groups.create(name, description, configuration)
    }

    pub fn get_work_group(&self, name: &str) -> ApiResult<&WorkGroup> {
        self.work_groups.get(name)
    }

    pub fn delete_work_group(&mut self, name: &str) -> ApiResult<()> {
        self.work_groups.delete(name)
    }

    pub fn list_work_groups(
        &self,
        next_token: Option<&str>,
        max_results: Option<usize>,
    ) -> ApiResult<Page<WorkGroupSummary>> {
        paginate(&self.work_groups.summaries(), next_token, max_results)
    }

    // ─── Data Catalogs ──────────────────────────────────────────────────────

    pub fn create_data_catalog(
        &mut self,
        name: &str,
        catalog_type: &str,
        description: &str,
        parameters: HashMap<String, String>,
    ) -> ApiResult<()> {
        self.data_catalogs
            .create(name, catalog_type, description, parameters)
    }

    pub fn get_data_catalog(&self, name: &str) -> ApiResult<&DataCatalog> {
        self.data_catalogs.get(name)
    }

    pub fn list_data_catalogs(
        &self,
        next_token: Option<&str>,
        max_results: Option<usize>,
    ) -> ApiResult<Page<DataCatalogSummary>> {
        paginate(&self.data_catalogs.summaries(), next_token, max_results)
    }

    // ─── Named Queries ──────────────────────────────────────────────────────

    pub fn create_named_query(
        &mut self,
        name: &str,
        database: &str,
        query_string: &str,
        description: Option<String>,
        work_group: Option<String>,
    ) -> String {
        self.named_queries
            .create(name, database, query_string, description, work_group)
    }

    pub fn get_named_query(&self, id: &str) -> ApiResult<&NamedQuery> {
        self.named_queries.get(id)
    }

    /// List named query ids. An omitted workgroup filter means `"primary"`,
    /// matching the service default.
    pub fn list_named_queries(
        &self,
        work_group: Option<&str>,
        next_token: Option<&str>,
        max_results: Option<usize>,
    ) -> ApiResult<Page<String>> {
        let work_group = work_group.unwrap_or(PRIMARY_WORK_GROUP);
        paginate(
            &self.named_queries.ids_in_work_group(work_group),
            next_token,
            max_results,
        )
    }

    // ─── Prepared Statements ────────────────────────────────────────────────

    /// Create a prepared statement. The referenced workgroup must exist.
    pub fn create_prepared_statement(
        &mut self,
        statement_name: &str,
        work_group: &str,
        query_statement: &str,
        description: Option<String>,
    ) -> ApiResult<()> {
        if !self.work_groups.contains(work_group) {
            return Err(ApiError::work_group_invalid_reference());
        }
        self.prepared_statements.put(PreparedStatement {
            statement_name: statement_name.to_string(),
            query_statement: query_statement.to_string(),
            work_group_name: work_group.to_string(),
            description,
            last_modified_time: Utc::now(),
        });
        Ok(())
    }

    pub fn get_prepared_statement(
        &self,
        statement_name: &str,
        work_group: &str,
    ) -> ApiResult<&PreparedStatement> {
        if !self.work_groups.contains(work_group) {
            return Err(ApiError::work_group_invalid_reference());
        }
        self.prepared_statements.get(statement_name, work_group)
    }

    // ─── Query Executions ───────────────────────────────────────────────────

    /// Start a query execution and return its id. A named workgroup must
    /// exist; the check happens before any state change.
    pub fn start_query_execution(
        &mut self,
        query: &str,
        context: QueryExecutionContext,
        result_configuration: Option<ResultConfiguration>,
        execution_parameters: Option<Vec<String>>,
        work_group: Option<String>,
    ) -> ApiResult<String> {
        if let Some(wg) = work_group.as_deref() {
            if !self.work_groups.contains(wg) {
                return Err(ApiError::work_group_invalid_reference());
            }
        }
        Ok(self.executions.start(
            query,
            context,
            result_configuration,
            execution_parameters,
            work_group,
        ))
    }

    pub fn get_query_execution(&self, id: &str) -> ApiResult<&QueryExecution> {
        self.executions.get(id)
    }

    pub fn stop_query_execution(&mut self, id: &str) -> ApiResult<()> {
        self.executions.stop(id)
    }

    pub fn get_query_runtime_statistics(&self, id: &str) -> ApiResult<QueryRuntimeStatistics> {
        self.executions.runtime_statistics(id)
    }

    pub fn list_query_executions(
        &self,
        work_group: Option<&str>,
        next_token: Option<&str>,
        max_results: Option<usize>,
    ) -> ApiResult<Page<String>> {
        paginate(&self.executions.ids(work_group), next_token, max_results)
    }

    // ─── Query Results ──────────────────────────────────────────────────────

    /// Resolve results for an execution id. The id does not have to name a
    /// real execution; unseeded ids against an empty queue get an empty set.
    pub fn get_query_results(&mut self, id: &str) -> QueryResults {
        self.results.resolve(id)
    }

    /// Test-harness side channel: bind a result set to an execution id,
    /// bypassing the execution lifecycle entirely.
    pub fn seed_query_results(&mut self, id: &str, results: QueryResults) {
        self.results.seed_for_id(id, results);
    }

    /// Test-harness side channel: push a result set onto the shared FIFO
    /// queue.
    pub fn enqueue_query_results(&mut self, results: QueryResults) {
        self.results.enqueue(results);
    }
}
