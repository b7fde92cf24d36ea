pub mod handler;
pub mod types;

pub use handler::AthenaApi;
