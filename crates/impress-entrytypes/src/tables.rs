//! Built-in entry-type tables.
//!
//! One row per type, listing field names literally. Rows carry no behaviour;
//! [`crate::EntryTypeRegistry::standard`] turns them into schemas.

use crate::schema::SchemaRow;

/// Classic BibTeX types. These are the types the tag-file importers infer,
/// so imported entries always resolve to a known schema.
pub const BIBTEX_TYPES: &[SchemaRow] = &[
    SchemaRow {
        name: "article",
        required: &["author", "title", "journal", "year"],
        optional: &["volume", "number", "pages", "month", "note"],
    },
    SchemaRow {
        name: "book",
        required: &["author/editor", "title", "publisher", "year"],
        optional: &[
            "volume", "number", "series", "address", "edition", "month", "note",
        ],
    },
    SchemaRow {
        name: "inbook",
        required: &["author/editor", "title", "chapter/pages", "publisher", "year"],
        optional: &[
            "volume", "number", "series", "type", "address", "edition", "month", "note",
        ],
    },
    SchemaRow {
        name: "inproceedings",
        required: &["author", "title", "booktitle", "year"],
        optional: &[
            "editor",
            "volume",
            "number",
            "series",
            "pages",
            "address",
            "month",
            "organization",
            "publisher",
            "note",
        ],
    },
    SchemaRow {
        name: "techreport",
        required: &["author", "title", "institution", "year"],
        optional: &["type", "number", "address", "month", "note"],
    },
    SchemaRow {
        name: "mastersthesis",
        required: &["author", "title", "school", "year"],
        optional: &["type", "address", "month", "note"],
    },
    SchemaRow {
        name: "phdthesis",
        required: &["author", "title", "school", "year"],
        optional: &["type", "address", "month", "note"],
    },
    SchemaRow {
        name: "misc",
        required: &[],
        optional: &["author", "title", "howpublished", "month", "year", "note"],
    },
];

/// Types defined by the IEEEtran bibliography style.
pub const IEEETRAN_TYPES: &[SchemaRow] = &[
    // Internet references
    SchemaRow {
        name: "electronic",
        required: &[],
        optional: &[
            "author",
            "month",
            "year",
            "title",
            "language",
            "howpublished",
            "organization",
            "address",
            "note",
            "url",
        ],
    },
    // Controls aspects of the bibliography style rather than citing anything
    SchemaRow {
        name: "ieeetranbstctl",
        required: &[],
        optional: &[
            "ctluse_article_number",
            "ctluse_paper",
            "ctluse_forced_etal",
            "ctluse_url",
            "ctlmax_names_forced_etal",
            "ctlnames_show_etal",
            "ctluse_alt_spacing",
            "ctlalt_stretch_factor",
            "ctldash_repeated_names",
            "ctlname_format_string",
            "ctlname_latex_cmd",
            "ctlname_url_prefix",
        ],
    },
    // Journals and magazines
    SchemaRow {
        name: "periodical",
        required: &["title", "year"],
        optional: &[
            "editor",
            "language",
            "series",
            "volume",
            "number",
            "organization",
            "month",
            "note",
            "url",
        ],
    },
    // `number` is required, so it is not repeated among the optional fields.
    SchemaRow {
        name: "patent",
        required: &["nationality", "number", "year/yearfiled"],
        optional: &[
            "author",
            "title",
            "language",
            "assignee",
            "address",
            "type",
            "day",
            "dayfiled",
            "month",
            "monthfiled",
            "note",
            "url",
        ],
    },
    // Proposed or formally published standards
    SchemaRow {
        name: "standard",
        required: &["title", "organization/institution"],
        optional: &[
            "author",
            "language",
            "howpublished",
            "type",
            "number",
            "revision",
            "address",
            "month",
            "year",
            "note",
            "url",
        ],
    },
];
