//! Biblioscape tag → canonical field mapping
//!
//! Each tag has exactly one rule. Most tags rename straight to a BibTeX
//! field; the rest feed composites (pages, address, comment), title
//! candidates or type hints that the assembler resolves once the entry
//! type is known.

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;

use super::types::{HintSlot, TypeHints};
use crate::entry::fields;
use crate::tagfile::RawRecord;

/// What to do with one Biblioscape tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Copy to the named canonical field
    Rename(&'static str),
    PageStart,
    PageEnd,
    Address,
    Country,
    /// Add `"<label>: <value>"` to the comment list
    Comment(&'static str),
    /// `url` for remote links, `pdf` otherwise
    Link,
    TitleTi,
    TitleSt,
    TypeHint(HintSlot),
}

lazy_static! {
    static ref TAG_RULES: HashMap<&'static str, TagRule> = {
        use TagRule::*;
        let rules = [
            ("AU", Rename(fields::AUTHOR)),
            ("YP", Rename(fields::YEAR)),
            ("VL", Rename(fields::VOLUME)),
            ("NB", Rename(fields::NUMBER)),
            ("KW", Rename(fields::KEYWORDS)),
            ("NT", Rename(fields::NOTE)),
            ("PB", Rename(fields::PUBLISHER)),
            ("ED", Rename(fields::EDITION)),
            ("IS", Rename(fields::ISBN)),
            ("AB", Rename(fields::ABSTRACT)),
            ("LG", Rename(fields::LANGUAGE)),
            ("DE", Rename(fields::ANNOTE)),
            ("SE", Rename(fields::CHAPTER)),
            ("PS", PageStart),
            ("PE", PageEnd),
            ("AD", Address),
            ("CO", Country),
            ("UR", Link),
            ("AT", Link),
            ("TI", TitleTi),
            ("ST", TitleSt),
            ("RT", TypeHint(HintSlot::ReferenceType)),
            ("TW", TypeHint(HintSlot::TypeOfWork)),
            ("SB", Comment("Subject")),
            ("SA", Comment("Secondary Authors")),
            ("TA", Comment("Tertiary Authors")),
            ("TT", Comment("Tertiary Title")),
            ("QA", Comment("Quaternary Authors")),
            ("QT", Comment("Quaternary Title")),
            ("C1", Comment("Custom1")),
            ("C2", Comment("Custom2")),
            ("C3", Comment("Custom3")),
            ("C4", Comment("Custom4")),
            ("C5", Comment("Custom5")),
            ("C6", Comment("Custom6")),
            ("CA", Comment("Categories")),
            ("TH", Comment("Short Title")),
        ];
        rules.into_iter().collect()
    };
}

/// Rule for a tag, or `None` for tags the importer ignores
pub fn rule_for(tag: &str) -> Option<TagRule> {
    TAG_RULES.get(tag).copied()
}

/// Link prefixes treated as remote
const REMOTE_PREFIXES: [&str; 2] = ["http://", "ftp://"];

/// Whether a link value points at a remote resource
pub fn is_remote_link(value: &str) -> bool {
    let value = value.trim();
    REMOTE_PREFIXES.iter().any(|p| value.starts_with(p))
}

/// Mapper output for one record, before type-dependent placement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecord {
    pub fields: BTreeMap<String, String>,
    pub hints: TypeHints,
    pub title_ti: Option<String>,
    pub title_st: Option<String>,
    pub page_start: Option<String>,
    pub page_end: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub comments: Vec<String>,
}

impl MappedRecord {
    /// `start--end`, `start`, or `--end`; `None` when neither is present
    pub fn pages(&self) -> Option<String> {
        if self.page_start.is_none() && self.page_end.is_none() {
            return None;
        }
        let mut pages = self.page_start.clone().unwrap_or_default();
        if let Some(end) = &self.page_end {
            pages.push_str("--");
            pages.push_str(end);
        }
        Some(pages)
    }

    /// `address, country`; `None` without an address, even if a country is set
    pub fn full_address(&self) -> Option<String> {
        let address = self.address.as_ref()?;
        Some(match &self.country {
            Some(country) => format!("{}, {}", address, country),
            None => address.clone(),
        })
    }

    /// Comment lines joined with `;`
    pub fn comment(&self) -> Option<String> {
        if self.comments.is_empty() {
            None
        } else {
            Some(self.comments.join(";"))
        }
    }
}

/// Map a raw record. Pure: the same record always maps to the same result.
pub fn map_record(record: &RawRecord) -> MappedRecord {
    let mut mapped = MappedRecord::default();

    for field in record.iter() {
        let Some(rule) = rule_for(&field.tag) else {
            tracing::trace!("Ignoring Biblioscape tag {}", field.tag);
            continue;
        };
        let value = field.text.clone();

        match rule {
            TagRule::Rename(name) => {
                mapped.fields.insert(name.to_string(), value);
            }
            TagRule::PageStart => mapped.page_start = Some(value),
            TagRule::PageEnd => mapped.page_end = Some(value),
            TagRule::Address => mapped.address = Some(value),
            TagRule::Country => mapped.country = Some(value),
            TagRule::Comment(label) => mapped.comments.push(format!("{}: {}", label, value)),
            TagRule::Link => {
                let name = if is_remote_link(&value) {
                    fields::URL
                } else {
                    fields::PDF
                };
                mapped.fields.insert(name.to_string(), value);
            }
            TagRule::TitleTi => mapped.title_ti = Some(value),
            TagRule::TitleSt => mapped.title_st = Some(value),
            TagRule::TypeHint(slot) => mapped.hints.set(slot, value),
        }
    }

    mapped
}
