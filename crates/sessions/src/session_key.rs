//! Structured session keys.
//!
//! A session key is an ordered set of `field=value` pairs (e.g.
//! `subject=subj1,session=3`).  Its textual form is the same comma-separated
//! list, which is what the CLI accepts and what error messages print.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one acquisition session by its primary-key fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(BTreeMap<String, String>);

impl SessionKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set `field` to `value`, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SessionKey {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<empty key>");
        }
        for (i, (field, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{field}={value}")?;
        }
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSessionKeyError {
    #[error("session key is empty")]
    Empty,
    #[error("expected field=value, got {0:?}")]
    MissingEquals(String),
    #[error("empty field name in {0:?}")]
    EmptyField(String),
    #[error("field {0:?} given more than once")]
    DuplicateField(String),
}

impl FromStr for SessionKey {
    type Err = ParseSessionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut key = SessionKey::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (field, value) = part
                .split_once('=')
                .ok_or_else(|| ParseSessionKeyError::MissingEquals(part.to_owned()))?;
            let field = field.trim();
            if field.is_empty() {
                return Err(ParseSessionKeyError::EmptyField(part.to_owned()));
            }
            if key.insert(field, value.trim()).is_some() {
                return Err(ParseSessionKeyError::DuplicateField(field.to_owned()));
            }
        }
        if key.is_empty() {
            return Err(ParseSessionKeyError::Empty);
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_fields() {
        let key: SessionKey = "subject=subj1, session=3".parse().unwrap();
        assert_eq!(key.get("subject"), Some("subj1"));
        assert_eq!(key.get("session"), Some("3"));
        assert_eq!(key.len(), 2);
    }

    #[test]
    fn display_is_sorted_by_field() {
        let key = SessionKey::new().with("subject", "subj1").with("session", "3");
        assert_eq!(key.to_string(), "session=3,subject=subj1");
    }

    #[test]
    fn value_may_contain_equals() {
        let key: SessionKey = "note=a=b".parse().unwrap();
        assert_eq!(key.get("note"), Some("a=b"));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<SessionKey>(), Err(ParseSessionKeyError::Empty));
        assert_eq!(" , ".parse::<SessionKey>(), Err(ParseSessionKeyError::Empty));
    }

    #[test]
    fn rejects_missing_equals() {
        assert_eq!(
            "subject".parse::<SessionKey>(),
            Err(ParseSessionKeyError::MissingEquals("subject".into()))
        );
    }

    #[test]
    fn rejects_empty_field() {
        assert!(matches!(
            "=x".parse::<SessionKey>(),
            Err(ParseSessionKeyError::EmptyField(_))
        ));
    }

    #[test]
    fn rejects_duplicate_field() {
        assert_eq!(
            "subject=a,subject=b".parse::<SessionKey>(),
            Err(ParseSessionKeyError::DuplicateField("subject".into()))
        );
    }

    #[test]
    fn empty_key_display() {
        assert_eq!(SessionKey::new().to_string(), "<empty key>");
    }
}
