//! Collection schemas and the front-matter validator
//!
//! Each collection is described by a `Schema` value enumerating its
//! fields and their kinds; the validator is a pure function of that
//! descriptor plus one file's raw front-matter. Adding a collection
//! means adding a descriptor, not a new validator.

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::frontmatter::FrontMatter;
use crate::helpers::date;

/// Sentinel for an engagement that has not ended
pub const PRESENT: &str = "Present";

/// Schema validation errors. Each names the offending source file and
/// field so a failing build points straight at the content to fix.
#[derive(Debug)]
pub enum SchemaError {
    MissingField { source: String, field: &'static str },

    EmptyField { source: String, field: &'static str },

    InvalidDate {
        source: String,
        field: &'static str,
        value: String,
    },

    EndBeforeStart {
        source: String,
        start: String,
        end: String,
    },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::MissingField { source, field } => {
                write!(f, "{source}: missing required field `{field}`")
            }
            SchemaError::EmptyField { source, field } => {
                write!(f, "{source}: field `{field}` must not be empty")
            }
            SchemaError::InvalidDate {
                source,
                field,
                value,
            } => write!(
                f,
                "{source}: field `{field}` has unparseable date `{value}`, expected MM/DD/YYYY"
            ),
            SchemaError::EndBeforeStart { source, start, end } => write!(
                f,
                "{source}: `dateEnd` ({end}) is earlier than `dateStart` ({start})"
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Kinds a front-matter field can validate into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    /// A date or the literal `Present`
    DateOrPresent,
}

/// One field of a collection schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A collection schema: field names and kinds, all required
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Blog post schema
pub const BLOG: Schema = Schema {
    collection: "blog",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "description",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "date",
            kind: FieldKind::Date,
        },
    ],
};

/// Work history schema
pub const WORK: Schema = Schema {
    collection: "work",
    fields: &[
        FieldSpec {
            name: "company",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "role",
            kind: FieldKind::Text,
        },
        FieldSpec {
            name: "dateStart",
            kind: FieldKind::Date,
        },
        FieldSpec {
            name: "dateEnd",
            kind: FieldKind::DateOrPresent,
        },
    ],
};

/// A validated field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Present,
}

impl Schema {
    /// Look up a schema by collection name
    pub fn by_name(collection: &str) -> Option<&'static Schema> {
        match collection {
            "blog" => Some(&BLOG),
            "work" => Some(&WORK),
            _ => None,
        }
    }

    /// Validate raw front-matter against this schema.
    ///
    /// Pure: no IO and no shared state, so it is safe to call per file,
    /// repeatedly and in any order. On failure nothing is produced;
    /// there is no partially-populated result.
    pub fn validate(
        &self,
        source: &str,
        raw: &FrontMatter,
    ) -> Result<IndexMap<&'static str, FieldValue>, SchemaError> {
        let mut out = IndexMap::with_capacity(self.fields.len());

        for spec in self.fields {
            let value = raw.get(spec.name).ok_or_else(|| SchemaError::MissingField {
                source: source.to_string(),
                field: spec.name,
            })?;

            let value = value.trim();
            if value.is_empty() {
                return Err(SchemaError::EmptyField {
                    source: source.to_string(),
                    field: spec.name,
                });
            }

            let parsed = match spec.kind {
                FieldKind::Text => FieldValue::Text(value.to_string()),
                FieldKind::Date => FieldValue::Date(parse_date(source, spec.name, value)?),
                FieldKind::DateOrPresent => {
                    if value == PRESENT {
                        FieldValue::Present
                    } else {
                        FieldValue::Date(parse_date(source, spec.name, value)?)
                    }
                }
            };

            out.insert(spec.name, parsed);
        }

        Ok(out)
    }
}

fn parse_date(source: &str, field: &'static str, value: &str) -> Result<NaiveDate, SchemaError> {
    date::parse(value).ok_or_else(|| SchemaError::InvalidDate {
        source: source.to_string(),
        field,
        value: value.to_string(),
    })
}
