//! Per-request café selection.
//!
//! # Responsibilities
//! - Match café names against a search string (case-insensitive substring)
//! - Truncate the matches to a leading count
//!
//! # Design Decisions
//! - The search string is lower-cased once, at construction
//! - Empty search = always matches
//! - Search runs before truncation, so `count` limits matches, not the city list
//! - Results borrow from the directory; the directory is never touched

use super::Cafe;

/// Search and truncation applied to one city's café list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CafeFilter {
    search: String,
    limit: Option<usize>,
}

impl CafeFilter {
    pub fn new(search: impl AsRef<str>, limit: Option<usize>) -> Self {
        Self {
            search: search.as_ref().to_lowercase(),
            limit,
        }
    }

    /// Returns true if the café name contains the search string.
    pub fn matches(&self, cafe: &Cafe) -> bool {
        self.search.is_empty() || cafe.name.to_lowercase().contains(&self.search)
    }

    /// Select matching cafés in directory order, at most `limit` of them.
    pub fn apply<'a>(&self, cafes: &'a [Cafe]) -> Vec<&'a Cafe> {
        let matching = cafes.iter().filter(|cafe| self.matches(cafe));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
