//! Film entry data model
//!
//! A `FilmEntry` is the only record type the query engine understands.
//! It is decoded from a content node, which may carry storage-internal
//! properties; those never survive decoding.

mod film;

pub use film::FilmEntry;
