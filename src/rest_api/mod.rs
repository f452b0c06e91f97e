//! # Film REST API Module
//!
//! The HTTP-facing side of the query engine: the container route, the
//! `{"result": [...]}` body, and error-to-status mapping.

pub mod errors;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use response::FilmListResponse;
pub use server::{FilmApi, JSON_CONTENT_TYPE};
