use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::schema::{EntryTypeSchema, SchemaRow};
use crate::tables::{BIBTEX_TYPES, IEEETRAN_TYPES};

/// Error from the entry-type registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Entry type already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Field '{field}' is both required and optional in entry type '{entry_type}'")]
    OverlappingField { entry_type: String, field: String },
}

/// Validation error for an entry checked against its type's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// Registry of entry-type schemas, keyed by lowercase type name.
///
/// Populated once and then only read; wrap it in an `Arc` to share it
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct EntryTypeRegistry {
    schemas: HashMap<String, EntryTypeSchema>,
}

impl EntryTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the BibTeX types produced by the importers and the
    /// IEEEtran types.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for table in [BIBTEX_TYPES, IEEETRAN_TYPES] {
            let result = registry.register_rows(table);
            debug_assert!(result.is_ok(), "built-in entry types rejected: {:?}", result);
            if let Err(e) = result {
                tracing::error!("Built-in entry type rejected: {}", e);
            }
        }
        tracing::debug!("Standard entry-type registry holds {} types", registry.len());
        registry
    }

    /// Register a new schema. Fails if the name is taken or if a field is
    /// both required and optional.
    pub fn register(&mut self, schema: EntryTypeSchema) -> Result<(), RegistryError> {
        let key = schema.name.to_lowercase();
        if self.schemas.contains_key(&key) {
            return Err(RegistryError::AlreadyRegistered(key));
        }
        if let Some(field) = schema.overlapping_fields().first() {
            return Err(RegistryError::OverlappingField {
                entry_type: key,
                field: field.to_string(),
            });
        }
        self.schemas.insert(key, schema);
        Ok(())
    }

    /// Register every row of a static table, stopping at the first rejected row.
    pub fn register_rows(&mut self, rows: &[SchemaRow]) -> Result<(), RegistryError> {
        rows.iter()
            .try_for_each(|row| self.register(EntryTypeSchema::from(row)))
    }

    /// Look up a schema by type name (case-insensitive).
    pub fn lookup(&self, type_name: &str) -> Option<&EntryTypeSchema> {
        self.schemas.get(&type_name.to_lowercase())
    }

    /// Names of all registered types.
    pub fn all_type_names(&self) -> BTreeSet<String> {
        self.schemas.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Check `fields` against the schema of `entry_type`.
    ///
    /// Fields holding only whitespace count as missing. Fields the schema
    /// does not mention are allowed.
    pub fn validate(
        &self,
        entry_type: &str,
        fields: &BTreeMap<String, String>,
    ) -> Result<(), Vec<ValidationError>> {
        let Some(schema) = self.lookup(entry_type) else {
            return Err(vec![ValidationError {
                field: "entry_type".into(),
                message: format!("unknown entry type: '{}'", entry_type),
            }]);
        };

        let is_present = |name: &str| {
            fields
                .get(name)
                .map(|value| !value.trim().is_empty())
                .unwrap_or(false)
        };

        let errors: Vec<ValidationError> = schema
            .missing_required(is_present)
            .into_iter()
            .map(|field| ValidationError {
                field: field.to_string(),
                message: "required field missing".into(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = EntryTypeRegistry::new();
        reg.register(EntryTypeSchema::new("Periodical", ["title", "year"], ["url"]))
            .unwrap();
        assert!(reg.lookup("periodical").is_some());
        assert!(reg.lookup("PERIODICAL").is_some());
        assert!(reg.lookup("nonexistent").is_none());
    }

    #[test]
    fn register_duplicate_fails() {
        let mut reg = EntryTypeRegistry::new();
        reg.register(EntryTypeSchema::new("misc", Vec::<String>::new(), ["note"]))
            .unwrap();
        let err = reg
            .register(EntryTypeSchema::new("MISC", Vec::<String>::new(), ["url"]))
            .unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered(_)));
    }

    #[test]
    fn register_overlapping_fields_fails() {
        let mut reg = EntryTypeRegistry::new();
        let err = reg
            .register(EntryTypeSchema::new("patent", ["number"], ["number", "url"]))
            .unwrap_err();
        match err {
            RegistryError::OverlappingField { entry_type, field } => {
                assert_eq!(entry_type, "patent");
                assert_eq!(field, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn register_rows_rejects_clashing_table() {
        const CLASHING: &[SchemaRow] = &[
            SchemaRow {
                name: "report",
                required: &["title"],
                optional: &["note"],
            },
            SchemaRow {
                name: "Report",
                required: &["institution"],
                optional: &[],
            },
        ];
        let mut reg = EntryTypeRegistry::new();
        let err = reg.register_rows(CLASHING).unwrap_err();
        assert!(matches!(err, RegistryError::AlreadyRegistered(ref name) if name == "report"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn register_rows_rejects_overlapping_row() {
        const OVERLAPPING: &[SchemaRow] = &[SchemaRow {
            name: "patent",
            required: &["number"],
            optional: &["number"],
        }];
        let mut reg = EntryTypeRegistry::new();
        assert!(matches!(
            reg.register_rows(OVERLAPPING),
            Err(RegistryError::OverlappingField { .. })
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn standard_registry_holds_every_table_row() {
        let reg = EntryTypeRegistry::standard();
        assert_eq!(reg.len(), BIBTEX_TYPES.len() + IEEETRAN_TYPES.len());
        for row in BIBTEX_TYPES.iter().chain(IEEETRAN_TYPES.iter()) {
            assert!(reg.lookup(row.name).is_some(), "missing {}", row.name);
        }
    }

    #[test]
    fn standard_schemas_are_disjoint() {
        let reg = EntryTypeRegistry::standard();
        for name in reg.all_type_names() {
            let schema = reg.lookup(&name).unwrap();
            assert!(schema.overlapping_fields().is_empty(), "{name} overlaps");
        }
    }

    #[test]
    fn electronic_has_no_required_fields() {
        let reg = EntryTypeRegistry::standard();
        let electronic = reg.lookup("Electronic").unwrap();
        assert!(electronic.required.is_empty());
        assert_eq!(electronic.optional.len(), 10);
        assert!(electronic.optional.contains("howpublished"));
        assert!(reg.validate("electronic", &BTreeMap::new()).is_ok());
    }

    #[rstest]
    #[case("periodical", &["title", "year"])]
    #[case("patent", &["nationality", "number", "year/yearfiled"])]
    #[case("standard", &["organization/institution", "title"])]
    #[case("ieeetranbstctl", &[])]
    fn ieeetran_required_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let reg = EntryTypeRegistry::standard();
        let schema = reg.lookup(name).unwrap();
        let required: Vec<&str> = schema.required.iter().map(String::as_str).collect();
        assert_eq!(required, expected);
    }

    #[test]
    fn validate_reports_missing_required() {
        let reg = EntryTypeRegistry::standard();
        let errs = reg
            .validate("periodical", &fields(&[("title", "Physics Today")]))
            .unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "year");
        assert!(errs[0].message.contains("required"));
    }

    #[test]
    fn validate_treats_blank_as_missing() {
        let reg = EntryTypeRegistry::standard();
        let errs = reg
            .validate("periodical", &fields(&[("title", "  "), ("year", "1999")]))
            .unwrap_err();
        assert_eq!(errs[0].field, "title");
    }

    #[test]
    fn validate_accepts_either_alternative() {
        let reg = EntryTypeRegistry::standard();
        let by_org = fields(&[("title", "IEEE 754"), ("organization", "IEEE")]);
        let by_inst = fields(&[("title", "ISO 8601"), ("institution", "ISO")]);
        assert!(reg.validate("standard", &by_org).is_ok());
        assert!(reg.validate("standard", &by_inst).is_ok());
    }

    #[test]
    fn validate_unknown_type() {
        let reg = EntryTypeRegistry::new();
        let errs = reg.validate("article", &BTreeMap::new()).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "entry_type");
        assert!(errs[0].message.contains("unknown"));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EntryTypeRegistry>();
    }
}
