//! Entry-type schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Separator between alternatives inside a required field name.
pub const ALTERNATIVE_SEPARATOR: char = '/';

/// Static description of an entry type, as written in the built-in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRow {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

/// Required and optional fields of one entry type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTypeSchema {
    /// Lowercase type name, e.g. `"periodical"`.
    pub name: String,
    pub required: BTreeSet<String>,
    pub optional: BTreeSet<String>,
}

impl EntryTypeSchema {
    pub fn new<R, O>(name: &str, required: R, optional: O) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            name: name.to_lowercase(),
            required: required.into_iter().map(Into::into).collect(),
            optional: optional.into_iter().map(Into::into).collect(),
        }
    }

    /// Field names present in both sets. Empty for a well-formed schema.
    pub fn overlapping_fields(&self) -> Vec<&str> {
        self.required
            .intersection(&self.optional)
            .map(String::as_str)
            .collect()
    }

    /// Required entries not satisfied by `is_present`.
    pub fn missing_required<F>(&self, is_present: F) -> Vec<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.required
            .iter()
            .filter(|req| !alternatives(req).any(&is_present))
            .map(String::as_str)
            .collect()
    }
}

impl From<&SchemaRow> for EntryTypeSchema {
    fn from(row: &SchemaRow) -> Self {
        EntryTypeSchema::new(
            row.name,
            row.required.iter().copied(),
            row.optional.iter().copied(),
        )
    }
}

/// Split a required entry into its alternatives.
pub fn alternatives(required: &str) -> impl Iterator<Item = &str> {
    required.split(ALTERNATIVE_SEPARATOR).map(str::trim)
}
