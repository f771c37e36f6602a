//! Import format contract and registry

use std::collections::BTreeSet;
use std::io::BufRead;
use std::sync::Arc;

use crate::biblioscape::BiblioscapeImporter;
use crate::entry::BibEntry;
use crate::error::ImportError;

/// Result of importing one input: the entries in input order, or why the
/// input was rejected. `Ok(vec![])` is a valid file with no records.
pub type ParseOutcome = Result<Vec<BibEntry>, ImportError>;

/// A bibliographic file format the application can import.
///
/// Implementations hold no per-import state, so one instance can serve
/// concurrent imports of independent inputs.
pub trait ImportFormat: Send + Sync {
    fn format_name(&self) -> &str;

    fn description(&self) -> &str;

    /// File extensions including the dot, e.g. `".txt"`
    fn recognized_extensions(&self) -> BTreeSet<String>;

    /// Whether the content looks like this format
    fn is_recognized(&self, reader: &mut dyn BufRead) -> Result<bool, ImportError>;

    fn import(&self, reader: &mut dyn BufRead) -> ParseOutcome;

    /// Import from an in-memory string
    fn import_str(&self, input: &str) -> ParseOutcome {
        let mut reader = input.as_bytes();
        self.import(&mut reader)
    }
}

/// Registered import formats, looked up by name or file extension
#[derive(Clone, Default)]
pub struct FormatRegistry {
    formats: Vec<Arc<dyn ImportFormat>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in format
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(BiblioscapeImporter::new()));
        registry
    }

    /// Add a format. A format with the same name (case-insensitive) is replaced.
    pub fn register(&mut self, format: Arc<dyn ImportFormat>) {
        let name = format.format_name().to_lowercase();
        self.formats
            .retain(|f| f.format_name().to_lowercase() != name);
        self.formats.push(format);
    }

    /// Look up a format by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<Arc<dyn ImportFormat>, ImportError> {
        let wanted = name.to_lowercase();
        self.formats
            .iter()
            .find(|f| f.format_name().to_lowercase() == wanted)
            .cloned()
            .ok_or_else(|| ImportError::UnknownFormat(name.to_string()))
    }

    /// Formats claiming a file extension; accepts `txt` or `.txt`
    pub fn for_extension(&self, extension: &str) -> Vec<Arc<dyn ImportFormat>> {
        let ext = extension.to_lowercase();
        let ext = if ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        };
        self.formats
            .iter()
            .filter(|f| f.recognized_extensions().contains(&ext))
            .cloned()
            .collect()
    }

    pub fn format_names(&self) -> Vec<String> {
        self.formats
            .iter()
            .map(|f| f.format_name().to_string())
            .collect()
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.format_names())
            .finish()
    }
}
