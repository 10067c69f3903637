//! Content store, loading and validation.
//!
//! Records are loaded once from their sources, frozen into a
//! [`ContentStore`], and from then on only read.
//!
//! # Data Layout
//!
//! ```text
//! ~/.soma/
//! ├── config.yaml           # Optional configuration
//! └── corpus/               # Extra data files, merged after the built-in set
//!     ├── advocacy.yaml     # { version, advocacy: [...], topics: [...] }
//!     └── topics/*.json
//! ```

pub mod corpus;
pub mod loader;
pub mod record;
pub mod store;
pub mod validate;

pub use corpus::Corpus;
pub use loader::{load_corpus, BuiltinSource, CorpusFile, CorpusSource, DirectorySource};
pub use record::Record;
pub use store::{ContentStore, StoreBuilder, StoreError};
pub use validate::{validate_corpus, Issue, Severity, ValidationReport};
