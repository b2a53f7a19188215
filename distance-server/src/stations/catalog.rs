//! Station catalog lookup.

use std::collections::HashMap;

use crate::domain::{Coordinates, StationCode};

/// A single long-distance station, as retained from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Human-readable display name (e.g. "Berlin Hbf")
    pub name: String,

    /// Short code used as the lookup key
    pub code: StationCode,

    /// Geographic position
    pub coords: Coordinates,
}

/// Immutable mapping from short code to station record.
///
/// Built once by the loader; every code maps to exactly one record
/// (the loader rejects duplicates). Reads need no synchronization.
#[derive(Debug, Default)]
pub struct StationCatalog {
    stations: HashMap<StationCode, StationRecord>,
}

impl StationCatalog {
    pub(super) fn new(stations: HashMap<StationCode, StationRecord>) -> Self {
        Self { stations }
    }

    /// Look up a station by its short code.
    ///
    /// The match is exact and case-sensitive; there is no fuzzy or
    /// partial matching.
    pub fn find(&self, code: &StationCode) -> Option<&StationRecord> {
        self.stations.get(code)
    }

    /// Number of stations in the catalog.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the catalog holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, name: &str) -> StationRecord {
        StationRecord {
            name: name.to_string(),
            code: StationCode::parse(code).unwrap(),
            coords: Coordinates::new(0.0, 0.0),
        }
    }

    #[test]
    fn find_known_code() {
        let code = StationCode::parse("BL").unwrap();
        let mut map = HashMap::new();
        map.insert(code.clone(), record("BL", "Berlin Hbf"));
        let catalog = StationCatalog::new(map);

        assert_eq!(catalog.find(&code).unwrap().name, "Berlin Hbf");
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn find_unknown_code() {
        let catalog = StationCatalog::default();
        assert!(catalog.find(&StationCode::parse("ZZZZZ").unwrap()).is_none());
        assert!(catalog.is_empty());
    }
}
