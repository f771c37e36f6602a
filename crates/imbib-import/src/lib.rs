//! imbib-import: tag-file importers for the imbib publication manager
//!
//! This library provides:
//! - A line-oriented tag-file parser producing raw tag/value records
//! - The Biblioscape field mapper, type inference and entry assembler
//! - A registry of import formats keyed by name and file extension
//! - Configuration for the `imbib-import` command-line tool
//!
//! Imported entries use BibTeX field names and can be checked against the
//! schemas in `impress-entrytypes`.
//!
//! ```
//! use imbib_import::{BiblioscapeImporter, ImportFormat};
//!
//! let input = "--TI-- A Title\n--YP-- 2001\n------\n";
//! let entries = BiblioscapeImporter::new().import_str(input).unwrap();
//! assert_eq!(entries[0].title(), Some("A Title"));
//! assert_eq!(entries[0].entry_type, "misc");
//! ```

pub mod biblioscape;
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod tagfile;

// Re-export main types for convenience
pub use biblioscape::{BiblioscapeImporter, EntryType};
pub use config::{ConfigError, ConfigOverrides, ImportConfig};
pub use entry::{BibEntry, DEFAULT_ENTRY_ID};
pub use error::ImportError;
pub use format::{FormatRegistry, ImportFormat, ParseOutcome};
