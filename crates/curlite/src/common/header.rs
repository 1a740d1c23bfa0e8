use core::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    key: String,
    value: String,
}

impl Header {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Splits on the first `:` only, so values may contain colons themselves.
impl FromStr for Header {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s.split_once(':').ok_or_else(|| Error::invalid_header(s))?;
        Ok(Header::new(key.trim(), value.trim()))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Header set with unique names, emitted in first-insertion order.
///
/// Names compare ASCII case-insensitively. Inserting an existing name keeps
/// its position but takes the new spelling and value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers(Vec<Header>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        self.insert_header(Header::new(key, value))
    }

    pub fn insert_header(&mut self, header: Header) -> Option<String> {
        match self.position(header.key()) {
            Some(idx) => {
                let old = std::mem::replace(&mut self.0[idx], header);
                Some(old.value)
            }
            None => {
                self.0.push(header);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|idx| self.0[idx].value())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.0.iter()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|h| h.key().eq_ignore_ascii_case(key))
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
