//! filmquery - deterministic queries over film award entries
//!
//! Request parameters become a typed `FilmQuery`; the executor filters
//! a container's records, sorts them, bounds the result, and the REST
//! layer serializes `{"result": [...]}`.

pub mod cli;
pub mod executor;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod planner;
pub mod rest_api;
pub mod store;
