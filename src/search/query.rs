// SPDX-License-Identifier: MPL-2.0
//! Normalized search query.

use std::fmt;

/// A trimmed search term. The empty query means "no active search".
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Query(String);

impl Query {
    /// Creates a query from raw user input, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_whitespace() {
        assert_eq!(Query::new("  red fox \n").as_str(), "red fox");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(Query::new(" \t ").is_empty());
        assert!(Query::default().is_empty());
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(Query::from("a  b").to_string(), "a  b");
    }
}
