//! Raw tag-file record data structures

/// A single raw field: two-character tag and its accumulated text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    pub tag: String,
    pub text: String,
}

/// Fields of one record, in the order they were opened
///
/// Tags are unique: opening a tag that is already present drops the earlier
/// occurrence and appends the new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<RawField>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a field and return its index, which stays valid until the next
    /// call to `open_field`.
    pub fn open_field(&mut self, tag: impl Into<String>, text: impl Into<String>) -> usize {
        let tag = tag.into();
        self.fields.retain(|f| f.tag != tag);
        self.fields.push(RawField {
            tag,
            text: text.into(),
        });
        self.fields.len() - 1
    }

    /// Append folded text to the field at `index`
    pub(crate) fn append_to(&mut self, index: usize, text: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            field.text.push_str(text);
        }
    }

    /// Get a field's text by tag
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.tag == tag)
            .map(|f| f.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: Into<String>, V: Into<String>> FromIterator<(T, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (tag, text) in iter {
            record.open_field(tag, text);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopened_tag_replaces_and_moves_to_end() {
        let mut record = RawRecord::new();
        record.open_field("AU", "Smith");
        record.open_field("TI", "Title");
        let idx = record.open_field("AU", "Doe");

        assert_eq!(idx, 1);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("AU"), Some("Doe"));
        let tags: Vec<&str> = record.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, vec!["TI", "AU"]);
    }

    #[test]
    fn append_extends_field() {
        let mut record = RawRecord::new();
        let idx = record.open_field("AB", "First half");
        record.append_to(idx, "second half");
        assert_eq!(record.get("AB"), Some("First halfsecond half"));
    }

    #[test]
    fn collect_from_pairs() {
        let record: RawRecord = [("PS", "12"), ("PE", "20")].into_iter().collect();
        assert_eq!(record.get("PS"), Some("12"));
        assert_eq!(record.get("PE"), Some("20"));
        assert!(record.get("AU").is_none());
    }
}
