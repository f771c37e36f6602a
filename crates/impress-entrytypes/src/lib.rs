//! impress-entrytypes: entry-type field schemas.
//!
//! Each entry type (`article`, `patent`, `periodical`, ...) declares which
//! fields must be present and which may be present. Importers do not consult
//! these schemas; the editor, exporters and the import CLI's validation mode
//! do, so the registry is built once and shared read-only.
//!
//! # Alternatives
//!
//! A required name containing `/` lists alternatives: `year/yearfiled` is
//! satisfied by either `year` or `yearfiled`.
//!
//! ```
//! use std::collections::BTreeMap;
//! use impress_entrytypes::EntryTypeRegistry;
//!
//! let registry = EntryTypeRegistry::standard();
//! let mut fields = BTreeMap::new();
//! fields.insert("nationality".to_string(), "US".to_string());
//! fields.insert("number".to_string(), "4,123,456".to_string());
//! fields.insert("yearfiled".to_string(), "1978".to_string());
//! assert!(registry.validate("Patent", &fields).is_ok());
//! ```

pub mod registry;
pub mod schema;
pub mod tables;

pub use registry::*;
pub use schema::*;
pub use tables::{BIBTEX_TYPES, IEEETRAN_TYPES};
