pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod types;

pub use error::ApiError;
pub use router::create_router;
pub use schema::{CatalogSchema, build_schema};
pub use types::*;
