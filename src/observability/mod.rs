//! Observability for the film query service
//!
//! Structured logging through `tracing`. Request handling opens a
//! `film_query` span per request; the executor reports scan and result
//! counts at debug level.

mod logger;

pub use logger::{init_logging, LogFormat, LoggingConfig};
