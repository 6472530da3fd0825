//! Front-matter parsing

use indexmap::IndexMap;
use serde_yaml::Value;
use thiserror::Error;

/// Front-matter header errors
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("front-matter header is not closed with `---`")]
    Unterminated,

    #[error("invalid YAML in front-matter header: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front-matter key `{0}` is not a scalar value")]
    NonScalar(String),
}

/// Raw front-matter: an ordered mapping of keys to scalar values.
///
/// Keys keep their declaration order from the source file. All scalars
/// are carried as strings; typing happens in the schema validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from a content string.
    /// Returns (front_matter, remaining_content).
    ///
    /// A file without a header parses as an empty mapping; required-field
    /// checks then fire during schema validation. A header that is opened
    /// but never closed, or that holds malformed YAML, is an error.
    pub fn parse(content: &str) -> Result<(Self, &str), HeaderError> {
        let trimmed = content.trim_start();
        if !trimmed.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = &trimmed[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            return Err(HeaderError::Unterminated);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let raw: IndexMap<String, Value> = serde_yaml::from_str(yaml_content)?;
        let mut fields = IndexMap::with_capacity(raw.len());
        for (key, value) in raw {
            let scalar = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return Err(HeaderError::NonScalar(key)),
            };
            fields.insert(key, scalar);
        }

        Ok((Self { fields }, remaining))
    }

    /// Look up a raw field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Set a field, keeping insertion order
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back into a `---` delimited header block
    pub fn to_header(&self) -> String {
        let mut out = String::from("---\n");
        for (key, value) in &self.fields {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&yaml_scalar(value));
            out.push('\n');
        }
        out.push_str("---\n");
        out
    }
}

/// Quote a scalar when plain YAML would mangle it
fn yaml_scalar(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value.contains(':')
        || value.contains('#')
        || value.contains('"')
        || value.contains('\n')
        || value.starts_with(['\'', '&', '*', '[', '{', '>', '|', '?', '-'])
        || value.trim() != value;

    if needs_quoting {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let content = "---\n\
                       title: Hello World\n\
                       description: First post\n\
                       date: 10/11/2024\n\
                       ---\n\
                       \n\
                       This is the content.\n";

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("title"), Some("Hello World"));
        assert_eq!(fm.get("date"), Some("10/11/2024"));
        assert!(remaining.contains("This is the content."));
    }

    #[test]
    fn test_keys_keep_declaration_order() {
        let content = "---\ncompany: Acme\nrole: Engineer\ndateStart: 01/01/2020\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        let keys: Vec<_> = fm.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["company", "role", "dateStart"]);
    }

    #[test]
    fn test_numbers_and_bools_become_strings() {
        let content = "---\ntitle: 2024\ndraft: true\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("title"), Some("2024"));
        assert_eq!(fm.get("draft"), Some("true"));
    }

    #[test]
    fn test_no_header_is_empty_mapping() {
        let content = "Just a body with no header.\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unterminated_header_is_an_error() {
        let content = "---\ntitle: Oops\n\nNo closing fence here.\n";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, HeaderError::Unterminated));
    }

    #[test]
    fn test_non_scalar_value_is_an_error() {
        let content = "---\ntitle: Fine\ntags:\n  - one\n  - two\n---\nBody";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, HeaderError::NonScalar(key) if key == "tags"));
    }

    #[test]
    fn test_header_round_trips() {
        let mut fm = FrontMatter::default();
        fm.insert("title", "Shipping a CLI: lessons learned");
        fm.insert("description", "Notes from the trenches");
        fm.insert("date", "10/11/2024");

        let header = fm.to_header();
        let (reparsed, remaining) = FrontMatter::parse(&header).unwrap();
        assert_eq!(reparsed, fm);
        assert!(remaining.is_empty());
    }
}
