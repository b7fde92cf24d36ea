use thiserror::Error;

/// Broad failure categories for control-plane operations.
///
/// The wire protocol collapses all of these into a single
/// `InvalidRequestException` code; the kind is kept so callers can branch
/// without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A uniquely keyed entity (workgroup, data catalog) already exists.
    AlreadyExists,
    /// The referenced entity does not exist.
    NotFound,
    /// The request is malformed or refers to something it may not.
    InvalidRequest,
}

/// A typed control-plane failure with a fixed, literal wire message.
///
/// Message text is part of the public contract: client test suites assert
/// on it verbatim, so the constructors below are the only places messages
/// are composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The machine-readable error code serialized on the wire.
    pub fn code(&self) -> &'static str {
        "InvalidRequestException"
    }

    pub fn work_group_exists() -> Self {
        Self::new(ErrorKind::AlreadyExists, "WorkGroup already exists")
    }

    pub fn work_group_missing() -> Self {
        Self::new(ErrorKind::NotFound, "WorkGroup does not exist")
    }

    /// StartQueryExecution names a workgroup that does not exist. Same
    /// message as [`work_group_missing`](Self::work_group_missing) but the
    /// kind reflects a bad reference in an otherwise valid request.
    pub fn work_group_invalid_reference() -> Self {
        Self::new(ErrorKind::InvalidRequest, "WorkGroup does not exist")
    }

    pub fn primary_work_group_protected() -> Self {
        Self::new(
            ErrorKind::InvalidRequest,
            "The primary workgroup cannot be deleted",
        )
    }

    pub fn data_catalog_exists() -> Self {
        Self::new(ErrorKind::AlreadyExists, "DataCatalog already exists")
    }

    pub fn data_catalog_missing() -> Self {
        Self::new(ErrorKind::NotFound, "DataCatalog does not exist")
    }

    pub fn query_execution_missing(id: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("QueryExecution {id} was not found"),
        )
    }

    pub fn named_query_missing(id: &str) -> Self {
        Self::new(ErrorKind::NotFound, format!("NamedQuery {id} was not found"))
    }

    pub fn prepared_statement_missing(name: &str) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("PreparedStatement {name} was not found"),
        )
    }

    pub fn invalid_next_token() -> Self {
        Self::new(ErrorKind::InvalidRequest, "Invalid NextToken")
    }
}

/// Result alias used throughout the backend and API layers.
pub type ApiResult<T> = Result<T, ApiError>;
