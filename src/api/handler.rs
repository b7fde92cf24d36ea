use std::sync::{Arc, Mutex};

use crate::backend::AthenaBackend;
use crate::error::ApiResult;

use super::types::*;

/// Per-action entry points over one scope's backend.
///
/// The surrounding dispatch framework parses a wire request into the
/// matching input type, calls the method, and serializes the output or the
/// [`ApiError`](crate::error::ApiError). Each call takes the scope's mutex
/// for its whole duration, which is the single-writer model the backend
/// assumes.
#[derive(Clone)]
pub struct AthenaApi {
    backend: Arc<Mutex<AthenaBackend>>,
}

impl AthenaApi {
    pub fn new(backend: Arc<Mutex<AthenaBackend>>) -> Self {
        Self { backend }
    }

    // ─── WorkGroups ─────────────────────────────────────────────────────────

    pub fn create_work_group(&self, input: CreateWorkGroupInput) -> ApiResult<CreateWorkGroupOutput> {
        self.backend.lock().unwrap().create_work_group(
            &input.name,
            &input.description,
            input.configuration,
        )?;
        Ok(CreateWorkGroupOutput {})
    }

    pub fn get_work_group(&self, input: GetWorkGroupInput) -> ApiResult<GetWorkGroupOutput> {
        let backend = self.backend.lock().unwrap();
        let work_group = backend.get_work_group(&input.work_group)?.clone();
        Ok(GetWorkGroupOutput { work_group })
    }

    pub fn list_work_groups(&self, input: ListWorkGroupsInput) -> ApiResult<ListWorkGroupsOutput> {
        let backend = self.backend.lock().unwrap();
        let page = backend.list_work_groups(input.next_token.as_deref(), input.max_results)?;
        Ok(ListWorkGroupsOutput {
            work_groups: page.items,
            next_token: page.next_token,
        })
    }

    pub fn delete_work_group(&self, input: DeleteWorkGroupInput) -> ApiResult<DeleteWorkGroupOutput> {
        self.backend
            .lock()
            .unwrap()
            .delete_work_group(&input.work_group)?;
        Ok(DeleteWorkGroupOutput {})
    }

    // ─── Data Catalogs ──────────────────────────────────────────────────────

    pub fn create_data_catalog(
        &self,
        input: CreateDataCatalogInput,
    ) -> ApiResult<CreateDataCatalogOutput> {
        self.backend.lock().unwrap().create_data_catalog(
            &input.name,
            &input.catalog_type,
            &input.description,
            input.parameters,
        )?;
        Ok(CreateDataCatalogOutput {})
    }

    pub fn get_data_catalog(&self, input: GetDataCatalogInput) -> ApiResult<GetDataCatalogOutput> {
        let backend = self.backend.lock().unwrap();
        let data_catalog = backend.get_data_catalog(&input.name)?.clone();
        Ok(GetDataCatalogOutput { data_catalog })
    }

    pub fn list_data_catalogs(
        &self,
        input: ListDataCatalogsInput,
    ) -> ApiResult<ListDataCatalogsOutput> {
        let backend = self.backend.lock().unwrap();
        let page = backend.list_data_catalogs(input.next_token.as_deref(), input.max_results)?;
        Ok(ListDataCatalogsOutput {
            data_catalogs_summary: page.items,
            next_token: page.next_token,
        })
    }

    // ─── Named Queries ──────────────────────────────────────────────────────

    pub fn create_named_query(
        &self,
        input: CreateNamedQueryInput,
    ) -> ApiResult<CreateNamedQueryOutput> {
        let named_query_id = self.backend.lock().unwrap().create_named_query(
            &input.name,
            &input.database,
            &input.query_string,
            input.description,
            input.work_group,
        );
        Ok(CreateNamedQueryOutput { named_query_id })
    }

    pub fn get_named_query(&self, input: GetNamedQueryInput) -> ApiResult<GetNamedQueryOutput> {
        let backend = self.backend.lock().unwrap();
        let named_query = backend.get_named_query(&input.named_query_id)?.clone();
        Ok(GetNamedQueryOutput { named_query })
    }

    pub fn list_named_queries(
        &self,
        input: ListNamedQueriesInput,
    ) -> ApiResult<ListNamedQueriesOutput> {
        let backend = self.backend.lock().unwrap();
        let page = backend.list_named_queries(
            input.work_group.as_deref(),
            input.next_token.as_deref(),
            input.max_results,
        )?;
        Ok(ListNamedQueriesOutput {
            named_query_ids: page.items,
            next_token: page.next_token,
        })
    }

    // ─── Prepared Statements ────────────────────────────────────────────────

    pub fn create_prepared_statement(
        &self,
        input: CreatePreparedStatementInput,
    ) -> ApiResult<CreatePreparedStatementOutput> {
        self.backend.lock().unwrap().create_prepared_statement(
            &input.statement_name,
            &input.work_group,
            &input.query_statement,
            input.description,
        )?;
        Ok(CreatePreparedStatementOutput {})
    }

    pub fn get_prepared_statement(
        &self,
        input: GetPreparedStatementInput,
    ) -> ApiResult<GetPreparedStatementOutput> {
        let backend = self.backend.lock().unwrap();
        let prepared_statement = backend
            .get_prepared_statement(&input.statement_name, &input.work_group)?
            .clone();
        Ok(GetPreparedStatementOutput { prepared_statement })
    }

    // ─── Query Executions ───────────────────────────────────────────────────

    pub fn start_query_execution(
        &self,
        input: StartQueryExecutionInput,
    ) -> ApiResult<StartQueryExecutionOutput> {
        let query_execution_id = self.backend.lock().unwrap().start_query_execution(
            &input.query_string,
            input.query_execution_context,
            input.result_configuration,
            input.execution_parameters,
            input.work_group,
        )?;
        Ok(StartQueryExecutionOutput { query_execution_id })
    }

    pub fn get_query_execution(
        &self,
        input: GetQueryExecutionInput,
    ) -> ApiResult<GetQueryExecutionOutput> {
        let backend = self.backend.lock().unwrap();
        let query_execution = backend
            .get_query_execution(&input.query_execution_id)?
            .clone();
        Ok(GetQueryExecutionOutput { query_execution })
    }

    pub fn stop_query_execution(
        &self,
        input: StopQueryExecutionInput,
    ) -> ApiResult<StopQueryExecutionOutput> {
        self.backend
            .lock()
            .unwrap()
            .stop_query_execution(&input.query_execution_id)?;
        Ok(StopQueryExecutionOutput {})
    }

    pub fn get_query_runtime_statistics(
        &self,
        input: GetQueryRuntimeStatisticsInput,
    ) -> ApiResult<GetQueryRuntimeStatisticsOutput> {
        let backend = self.backend.lock().unwrap();
        let query_runtime_statistics =
            backend.get_query_runtime_statistics(&input.query_execution_id)?;
        Ok(GetQueryRuntimeStatisticsOutput {
            query_runtime_statistics,
        })
    }

    pub fn list_query_executions(
        &self,
        input: ListQueryExecutionsInput,
    ) -> ApiResult<ListQueryExecutionsOutput> {
        let backend = self.backend.lock().unwrap();
        let page = backend.list_query_executions(
            input.work_group.as_deref(),
            input.next_token.as_deref(),
            input.max_results,
        )?;
        Ok(ListQueryExecutionsOutput {
            query_execution_ids: page.items,
            next_token: page.next_token,
        })
    }

    // ─── Query Results ──────────────────────────────────────────────────────

    pub fn get_query_results(&self, input: GetQueryResultsInput) -> ApiResult<GetQueryResultsOutput> {
        let results = self
            .backend
            .lock()
            .unwrap()
            .get_query_results(&input.query_execution_id);
        Ok(GetQueryResultsOutput {
            result_set: results.into(),
            next_token: None,
        })
    }
}
