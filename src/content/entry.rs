//! Blog and work entry models

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use super::frontmatter::FrontMatter;
use super::schema::{self, FieldValue, SchemaError};
use crate::helpers::date;

/// Anything with a display-ordering date
pub trait Dated {
    fn sort_date(&self) -> NaiveDate;
}

/// End of an engagement: a calendar date, or still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrPresent {
    Date(NaiveDate),
    Present,
}

impl fmt::Display for DateOrPresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrPresent::Date(d) => f.write_str(&date::format(d)),
            DateOrPresent::Present => f.write_str(schema::PRESENT),
        }
    }
}

impl Serialize for DateOrPresent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogEntry {
    /// Post title
    pub title: String,

    /// One-line description for listings and meta tags
    pub description: String,

    /// Publication date
    #[serde(serialize_with = "date::serialize")]
    pub date: NaiveDate,

    /// Raw markdown body
    pub body: String,

    /// Source file path (relative to the content dir)
    pub source: String,
}

impl BlogEntry {
    /// Validate raw front-matter into a typed entry
    pub fn from_frontmatter(
        source: &str,
        raw: &FrontMatter,
        body: &str,
    ) -> Result<Self, SchemaError> {
        let mut fields = schema::BLOG.validate(source, raw)?;

        Ok(Self {
            title: take_text(&mut fields, source, "title")?,
            description: take_text(&mut fields, source, "description")?,
            date: take_date(&mut fields, source, "date")?,
            body: body.to_string(),
            source: source.to_string(),
        })
    }

    /// Serialize the typed fields back into front-matter form
    pub fn to_frontmatter(&self) -> FrontMatter {
        let mut fm = FrontMatter::default();
        fm.insert("title", &self.title);
        fm.insert("description", &self.description);
        fm.insert("date", date::format(&self.date));
        fm
    }
}

impl Dated for BlogEntry {
    fn sort_date(&self) -> NaiveDate {
        self.date
    }
}

/// One work history entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkEntry {
    /// Employer name
    pub company: String,

    /// Role held there
    pub role: String,

    /// First day of the engagement
    #[serde(serialize_with = "date::serialize")]
    pub date_start: NaiveDate,

    /// Last day, or `Present` while the engagement is running
    pub date_end: DateOrPresent,

    /// Raw markdown body (typically a bullet list of achievements)
    pub body: String,

    /// Source file path (relative to the content dir)
    pub source: String,
}

impl WorkEntry {
    /// Validate raw front-matter into a typed entry
    pub fn from_frontmatter(
        source: &str,
        raw: &FrontMatter,
        body: &str,
    ) -> Result<Self, SchemaError> {
        let mut fields = schema::WORK.validate(source, raw)?;

        let company = take_text(&mut fields, source, "company")?;
        let role = take_text(&mut fields, source, "role")?;
        let date_start = take_date(&mut fields, source, "dateStart")?;
        let date_end = take_end(&mut fields, source, "dateEnd")?;

        if let DateOrPresent::Date(end) = date_end {
            if end < date_start {
                return Err(SchemaError::EndBeforeStart {
                    source: source.to_string(),
                    start: date::format(&date_start),
                    end: date::format(&end),
                });
            }
        }

        Ok(Self {
            company,
            role,
            date_start,
            date_end,
            body: body.to_string(),
            source: source.to_string(),
        })
    }

    /// Serialize the typed fields back into front-matter form
    pub fn to_frontmatter(&self) -> FrontMatter {
        let mut fm = FrontMatter::default();
        fm.insert("company", &self.company);
        fm.insert("role", &self.role);
        fm.insert("dateStart", date::format(&self.date_start));
        fm.insert("dateEnd", self.date_end.to_string());
        fm
    }
}

impl Dated for WorkEntry {
    fn sort_date(&self) -> NaiveDate {
        self.date_start
    }
}

// Schema validation guarantees presence and kind; the fallback arms
// below report the field as missing.

fn take_text(
    fields: &mut IndexMap<&'static str, FieldValue>,
    source: &str,
    name: &'static str,
) -> Result<String, SchemaError> {
    match fields.shift_remove(name) {
        Some(FieldValue::Text(s)) => Ok(s),
        _ => Err(SchemaError::MissingField {
            source: source.to_string(),
            field: name,
        }),
    }
}

fn take_date(
    fields: &mut IndexMap<&'static str, FieldValue>,
    source: &str,
    name: &'static str,
) -> Result<NaiveDate, SchemaError> {
    match fields.shift_remove(name) {
        Some(FieldValue::Date(d)) => Ok(d),
        _ => Err(SchemaError::MissingField {
            source: source.to_string(),
            field: name,
        }),
    }
}

fn take_end(
    fields: &mut IndexMap<&'static str, FieldValue>,
    source: &str,
    name: &'static str,
) -> Result<DateOrPresent, SchemaError> {
    match fields.shift_remove(name) {
        Some(FieldValue::Date(d)) => Ok(DateOrPresent::Date(d)),
        Some(FieldValue::Present) => Ok(DateOrPresent::Present),
        _ => Err(SchemaError::MissingField {
            source: source.to_string(),
            field: name,
        }),
    }
}
