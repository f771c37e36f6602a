//! Entry-type inference from Biblioscape type hints

/// Entry types the Biblioscape importer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryType {
    Article,
    InBook,
    Book,
    InProceedings,
    TechReport,
    MastersThesis,
    PhdThesis,
    #[default]
    Misc,
}

impl EntryType {
    pub const ALL: [EntryType; 8] = [
        EntryType::Article,
        EntryType::InBook,
        EntryType::Book,
        EntryType::InProceedings,
        EntryType::TechReport,
        EntryType::MastersThesis,
        EntryType::PhdThesis,
        EntryType::Misc,
    ];

    /// BibTeX type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::InBook => "inbook",
            Self::Book => "book",
            Self::InProceedings => "inproceedings",
            Self::TechReport => "techreport",
            Self::MastersThesis => "mastersthesis",
            Self::PhdThesis => "phdthesis",
            Self::Misc => "misc",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tag a type hint came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintSlot {
    /// `RT`, reference type
    ReferenceType = 0,
    /// `TW`, type of work; consulted first
    TypeOfWork = 1,
}

/// Raw type-indicator strings of one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeHints {
    slots: [Option<String>; 2],
}

impl TypeHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: HintSlot, value: impl Into<String>) {
        self.slots[slot as usize] = Some(value.into());
    }

    pub fn get(&self, slot: HintSlot) -> Option<&str> {
        self.slots[slot as usize].as_deref()
    }

    /// Present hints, highest priority first (`TW` before `RT`)
    pub fn by_priority(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().rev().filter_map(|s| s.as_deref())
    }
}

/// Keyword rules, checked in order against a lowercased hint. Every keyword
/// of a rule must occur.
const KEYWORD_RULES: &[(&[&str], EntryType)] = &[
    (&["article"], EntryType::Article),
    (&["journal"], EntryType::Article),
    (&["book section"], EntryType::InBook),
    (&["book"], EntryType::Book),
    (&["conference"], EntryType::InProceedings),
    (&["proceedings"], EntryType::InProceedings),
    (&["report"], EntryType::TechReport),
    (&["thesis", "master"], EntryType::MastersThesis),
    (&["thesis"], EntryType::PhdThesis),
];

/// Classify a single hint; `Misc` when no rule matches
pub fn classify_hint(hint: &str) -> EntryType {
    let hint = hint.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().all(|k| hint.contains(k)))
        .map(|(_, entry_type)| *entry_type)
        .unwrap_or(EntryType::Misc)
}

/// Resolve the entry type of a record from its hints
pub fn infer_entry_type(hints: &TypeHints) -> EntryType {
    hints
        .by_priority()
        .map(classify_hint)
        .find(|t| *t != EntryType::Misc)
        .unwrap_or(EntryType::Misc)
}
