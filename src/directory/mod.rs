//! Café directory subsystem.
//!
//! # Data Flow
//! ```text
//! config [cities] tables (or built-in dataset)
//!     → CityDirectory (built once at startup, immutable)
//!     → shared via Arc to the HTTP handler
//!     → filter.rs (search + truncation, per request)
//! ```
//!
//! # Design Decisions
//! - City lookup is an exact, case-sensitive key match
//! - Café order within a city is insertion order and is preserved
//! - Nothing here is mutated after construction, so reads need no locking

pub mod filter;

use std::collections::HashMap;

use serde::Deserialize;

pub use filter::CafeFilter;

/// A single café listed for a city.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cafe {
    /// Display name, matched by search.
    pub name: String,

    /// Street address.
    #[serde(default)]
    pub address: String,

    /// Average rating. Not used for filtering.
    #[serde(default)]
    pub rating: f32,
}

impl Cafe {
    pub fn new(name: impl Into<String>, address: impl Into<String>, rating: f32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            rating,
        }
    }
}

/// Read-only mapping from city name to its ordered café list.
#[derive(Debug, Clone, Default)]
pub struct CityDirectory {
    cities: HashMap<String, Vec<Cafe>>,
}

impl CityDirectory {
    /// Build a directory from configured city tables.
    ///
    /// Falls back to the built-in dataset when no city is configured.
    pub fn from_config(cities: &HashMap<String, Vec<Cafe>>) -> Self {
        if cities.is_empty() {
            tracing::info!("No cities configured, using built-in directory");
            return Self::builtin();
        }

        Self::from_entries(cities.iter().map(|(city, cafes)| (city.clone(), cafes.clone())))
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Cafe>)>,
        S: Into<String>,
    {
        Self {
            cities: entries
                .into_iter()
                .map(|(city, cafes)| (city.into(), cafes))
                .collect(),
        }
    }

    /// The dataset shipped with the service.
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "moscow",
                vec![
                    Cafe::new("Мир кофе", "ул. Тверская, 12", 4.6),
                    Cafe::new("Сладкоежка", "ул. Арбат, 3", 4.2),
                    Cafe::new("Кофе и завтраки", "Цветной бульвар, 15", 4.4),
                    Cafe::new("Сытый студент", "ул. Стромынка, 20", 3.9),
                    Cafe::new("Ложка и вилка", "ул. Покровка, 7", 4.1),
                ],
            ),
            (
                "tula",
                vec![
                    Cafe::new("Тульский пряник", "ул. Металлистов, 19", 4.7),
                    Cafe::new("Самовар", "пр. Ленина, 40", 4.3),
                    Cafe::new("Оружейная чайная", "ул. Советская, 8", 4.0),
                ],
            ),
        ])
    }

    /// Look up a city's cafés. Exact, case-sensitive match.
    pub fn get(&self, city: &str) -> Option<&[Cafe]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.contains_key(city)
    }

    /// City names, sorted for stable log output.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
