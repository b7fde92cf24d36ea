//! In-process emulator of the Amazon Athena control-plane API.
//!
//! No SQL is parsed or executed and no object storage is touched: query
//! executions succeed instantly with zeroed statistics, and result sets
//! come from fixtures seeded through a side channel on
//! [`backend::AthenaBackend`]. Backends are partitioned per
//! (account, region) scope by [`registry::BackendRegistry`]; the typed
//! request/response surface lives in [`api`].

pub mod api;
pub mod backend;
pub mod error;
pub mod models;
pub mod registry;

pub use api::AthenaApi;
pub use backend::AthenaBackend;
pub use error::{ApiError, ApiResult, ErrorKind};
pub use registry::{BackendRegistry, Scope, DEFAULT_ACCOUNT_ID};
