//! Record store adapters
//!
//! The query engine never reads storage itself. It asks a `RecordSource`
//! for the ordered candidate records of a container and works on the
//! returned sequence.
//!
//! Content is a JSON content tree:
//!
//! ```json
//! {
//!   "oscars": {
//!     "jcr:primaryType": "nt:unstructured",
//!     "parasite": { "title": "Parasite", "year": "2019", "awards": 4 }
//!   }
//! }
//! ```

mod content;
mod errors;
mod file;
mod source;

pub use content::{parse_content_tree, ContentStore};
pub use errors::{StoreError, StoreResult};
pub use file::FileContentStore;
pub use source::RecordSource;
