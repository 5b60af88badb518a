//! Query parameter collection and validation.
//!
//! # Responsibilities
//! - Pick `city`, `count` and `search` out of the raw query pairs
//! - Check the city against the directory (exact match)
//! - Parse `count` as a non-negative integer
//!
//! # Design Decisions
//! - The first occurrence of a repeated parameter wins
//! - City is checked before count
//! - An empty `count=` is treated as absent
//! - Validation is pure: it borrows the directory and returns a tagged result

use thiserror::Error;

use crate::directory::{Cafe, CafeFilter, CityDirectory};

/// The two ways a `/cafe` request can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    /// `city` missing or not in the directory.
    #[error("unknown city")]
    UnknownCity,

    /// `count` present but not a non-negative integer.
    #[error("incorrect count")]
    InvalidCount,
}

/// Raw, unvalidated query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeQuery {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeQuery {
    /// Collect the known parameters from decoded query pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut query.city,
                "count" => &mut query.count,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Validate against the directory.
    pub fn validate<'d>(&self, directory: &'d CityDirectory) -> Result<ValidatedQuery<'d>, RequestError> {
        let city = self.city.as_deref().ok_or(RequestError::UnknownCity)?;
        let cafes = directory.get(city).ok_or(RequestError::UnknownCity)?;
        let limit = parse_count(self.count.as_deref())?;
        let search = self.search.as_deref().unwrap_or_default();

        Ok(ValidatedQuery {
            city: city.to_string(),
            cafes,
            filter: CafeFilter::new(search, limit),
        })
    }
}

fn parse_count(raw: Option<&str>) -> Result<Option<usize>, RequestError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| RequestError::InvalidCount),
    }
}

/// A request that passed validation, bound to its city's café list.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<'d> {
    pub city: String,
    pub cafes: &'d [Cafe],
    pub filter: CafeFilter,
}

impl<'d> ValidatedQuery<'d> {
    pub fn select(&self) -> Vec<&'d Cafe> {
        self.filter.apply(self.cafes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> CafeQuery {
        CafeQuery::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_from_pairs_keeps_first_occurrence() {
        let q = query(&[("city", "tula"), ("city", "moscow"), ("extra", "x"), ("count", "2")]);
        assert_eq!(q.city.as_deref(), Some("tula"));
        assert_eq!(q.count.as_deref(), Some("2"));
        assert_eq!(q.search, None);
    }

    #[test]
    fn test_missing_or_unknown_city() {
        let directory = CityDirectory::builtin();

        let err = query(&[]).validate(&directory).unwrap_err();
        assert_eq!(err, RequestError::UnknownCity);

        let err = query(&[("city", "omsk")]).validate(&directory).unwrap_err();
        assert_eq!(err, RequestError::UnknownCity);

        let err = query(&[("city", "Moscow")]).validate(&directory).unwrap_err();
        assert_eq!(err, RequestError::UnknownCity);
    }

    #[test]
    fn test_city_checked_before_count() {
        let directory = CityDirectory::builtin();
        let err = query(&[("city", "omsk"), ("count", "na")])
            .validate(&directory)
            .unwrap_err();
        assert_eq!(err, RequestError::UnknownCity);
    }

    #[test]
    fn test_incorrect_count() {
        let directory = CityDirectory::builtin();
        for count in ["na", "-1", "1.5", " 2", "9999999999999999999999"] {
            let err = query(&[("city", "tula"), ("count", count)])
                .validate(&directory)
                .unwrap_err();
            assert_eq!(err, RequestError::InvalidCount, "count={count:?}");
        }
    }

    #[test]
    fn test_valid_query() {
        let directory = CityDirectory::builtin();

        let validated = query(&[("city", "moscow"), ("count", "2"), ("search", "Кофе")])
            .validate(&directory)
            .unwrap();
        assert_eq!(validated.city, "moscow");
        assert_eq!(validated.filter.limit(), Some(2));
        assert_eq!(validated.filter.search(), "кофе");
        assert_eq!(validated.select().len(), 2);

        let validated = query(&[("city", "tula"), ("count", "")])
            .validate(&directory)
            .unwrap();
        assert_eq!(validated.filter.limit(), None);
        assert_eq!(validated.select().len(), 3);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RequestError::UnknownCity.to_string(), "unknown city");
        assert_eq!(RequestError::InvalidCount.to_string(), "incorrect count");
    }
}
