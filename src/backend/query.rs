use std::collections::HashMap;

use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{NamedQuery, PreparedStatement};

/// Named query store for one scope. Ids are generated; names are not unique.
#[derive(Default)]
pub struct NamedQueryStore {
    queries: HashMap<String, NamedQuery>,
    // creation order, for listings
    order: Vec<String>,
}

impl NamedQueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a named query and return its generated id.
    pub fn create(
        &mut self,
        name: &str,
        database: &str,
        query_string: &str,
        description: Option<String>,
        work_group: Option<String>,
    ) -> String {
        let query = NamedQuery::new(name, database, query_string, description, work_group);
        let id = query.named_query_id.clone();
        debug!(name, id = %id, "creating named query");
        self.order.push(id.clone());
        self.queries.insert(id.clone(), query);
        id
    }

    pub fn get(&self, id: &str) -> ApiResult<&NamedQuery> {
        self.queries
            .get(id)
            .ok_or_else(|| ApiError::named_query_missing(id))
    }

    /// Ids of queries filed under the given workgroup, in creation order.
    pub fn ids_in_work_group(&self, work_group: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| {
                self.queries
                    .get(*id)
                    .map(|q| q.work_group == work_group)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}

/// Prepared statement store for one scope, keyed by
/// `(statement_name, work_group)`.
#[derive(Default)]
pub struct PreparedStatementStore {
    statements: HashMap<(String, String), PreparedStatement>,
}

impl PreparedStatementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a statement. Workgroup existence is checked by the
    /// backend before this is called.
    pub fn put(&mut self, statement: PreparedStatement) {
        debug!(
            name = %statement.statement_name,
            work_group = %statement.work_group_name,
            "storing prepared statement"
        );
        let key = (
            statement.statement_name.clone(),
            statement.work_group_name.clone(),
        );
        self.statements.insert(key, statement);
    }

    pub fn get(&self, statement_name: &str, work_group: &str) -> ApiResult<&PreparedStatement> {
        self.statements
            .get(&(statement_name.to_string(), work_group.to_string()))
            .ok_or_else(|| ApiError::prepared_statement_missing(statement_name))
    }
}
