use std::collections::HashMap;

use tracing::debug;

use crate::models::QueryResults;

/// Result provisioning for one scope.
///
/// Three sources, in precedence order: an explicit per-id seed, the shared
/// FIFO queue, or an empty result set. Queue entries are never removed;
/// instead a cursor marks the next unread entry and each previously unseen
/// id that reaches the queue binds to the entry at the cursor. Subsequent
/// reads by a bound id repeat its entry, so two ids never share a queue
/// position but one id always sees a stable answer.
#[derive(Default)]
pub struct ResultStore {
    seeded: HashMap<String, QueryResults>,
    queue: Vec<QueryResults>,
    cursor: usize,
    bindings: HashMap<String, usize>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a result set directly with an execution id. Takes
    /// precedence over any queue binding.
    pub fn seed_for_id(&mut self, id: &str, results: QueryResults) {
        debug!(id, rows = results.rows.len(), "seeding results for id");
        self.seeded.insert(id.to_string(), results);
    }

    /// Append a result set to the shared queue.
    pub fn enqueue(&mut self, results: QueryResults) {
        debug!(rows = results.rows.len(), "queueing results");
        self.queue.push(results);
    }

    /// Resolve the result set for an execution id.
    ///
    /// An id that asks while the queue is exhausted is not bound to
    /// emptiness; it may still bind to an entry enqueued later.
    pub fn resolve(&mut self, id: &str) -> QueryResults {
        if let Some(results) = self.seeded.get(id) {
            return results.clone();
        }
        if let Some(&idx) = self.bindings.get(id) {
            return self.queue[idx].clone();
        }
        if self.cursor < self.queue.len() {
            let idx = self.cursor;
            self.cursor += 1;
            self.bindings.insert(id.to_string(), idx);
            return self.queue[idx].clone();
        }
        QueryResults::default()
    }
}
