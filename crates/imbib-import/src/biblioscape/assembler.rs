//! Final entry assembly

use super::mapper::MappedRecord;
use super::types::EntryType;
use crate::entry::{fields, BibEntry};

/// Build the canonical entry from a mapped record and its resolved type.
///
/// `ST` is the journal of an article. For every other type it lands in
/// `booktitle`, including types where a book title makes little sense.
// TODO: settle whether ST on non-book, non-article types belongs in `note`.
pub fn assemble(mapped: MappedRecord, entry_type: EntryType) -> BibEntry {
    let mut entry = BibEntry::new(entry_type.as_str());

    let pages = mapped.pages();
    let address = mapped.full_address();
    let comment = mapped.comment();

    let MappedRecord {
        fields: parsed,
        title_ti,
        title_st,
        ..
    } = mapped;
    entry.set_fields(parsed);

    if let Some(st) = title_st {
        let target = match entry_type {
            EntryType::Article => fields::JOURNAL,
            _ => fields::BOOKTITLE,
        };
        entry.set_field(target, st);
    }
    if let Some(ti) = title_ti {
        entry.set_field(fields::TITLE, ti);
    }

    if let Some(pages) = pages {
        entry.set_field(fields::PAGES, pages);
    }
    if let Some(address) = address {
        entry.set_field(fields::ADDRESS, address);
    }
    if let Some(comment) = comment {
        entry.set_field(fields::COMMENT, comment);
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DEFAULT_ENTRY_ID;

    fn titled() -> MappedRecord {
        MappedRecord {
            title_ti: Some("Chapter Title".into()),
            title_st: Some("Container".into()),
            ..Default::default()
        }
    }

    #[test]
    fn article_places_st_in_journal() {
        let entry = assemble(titled(), EntryType::Article);
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.get_field("journal"), Some("Container"));
        assert_eq!(entry.get_field("title"), Some("Chapter Title"));
        assert!(entry.get_field("booktitle").is_none());
    }

    #[test]
    fn inbook_places_st_in_booktitle() {
        let entry = assemble(titled(), EntryType::InBook);
        assert_eq!(entry.get_field("booktitle"), Some("Container"));
        assert_eq!(entry.get_field("title"), Some("Chapter Title"));
    }

    #[test]
    fn other_types_also_use_booktitle() {
        for entry_type in [EntryType::Misc, EntryType::TechReport, EntryType::PhdThesis] {
            let entry = assemble(titled(), entry_type);
            assert_eq!(entry.get_field("booktitle"), Some("Container"));
            assert!(entry.get_field("journal").is_none());
        }
    }

    #[test]
    fn composites_are_merged() {
        let mapped = MappedRecord {
            page_start: Some("891".into()),
            page_end: Some("921".into()),
            address: Some("Berlin".into()),
            country: Some("Germany".into()),
            comments: vec!["Subject: Physics".into(), "Custom1: x".into()],
            ..Default::default()
        };
        let entry = assemble(mapped, EntryType::Article);
        assert_eq!(entry.pages(), Some("891--921"));
        assert_eq!(entry.get_field("address"), Some("Berlin, Germany"));
        assert_eq!(entry.get_field("comment"), Some("Subject: Physics;Custom1: x"));
    }

    #[test]
    fn empty_record_assembles_to_bare_entry() {
        let entry = assemble(MappedRecord::default(), EntryType::Misc);
        assert_eq!(entry.id, DEFAULT_ENTRY_ID);
        assert_eq!(entry.entry_type, "misc");
        assert!(entry.fields.is_empty());
    }
}
