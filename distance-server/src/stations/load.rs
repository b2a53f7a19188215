//! Station dataset loader.
//!
//! The source is a `;`-separated table with a header row and comma
//! decimal separators. Only rows classified as long-distance traffic
//! are retained; everything else is skipped before validation.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Coordinates, StationCode};

use super::catalog::{StationCatalog, StationRecord};
use super::error::DataLoadError;

/// Field separator used by the dataset.
const DELIMITER: u8 = b';';

/// Traffic classification marking a long-distance station.
const LONG_DISTANCE_MARKER: &str = "FV";

/// Columns the loader requires in the header row.
const REQUIRED_COLUMNS: [&str; 5] = ["Verkehr", "NAME", "DS100", "Laenge", "Breite"];

/// One source row, before filtering and projection.
///
/// Coordinates stay as strings here: the dataset writes decimals with
/// a comma, which has to be normalized before numeric parsing.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Verkehr")]
    traffic: String,
    #[serde(rename = "NAME")]
    name: String,
    #[serde(rename = "DS100")]
    code: String,
    #[serde(rename = "Laenge")]
    longitude: String,
    #[serde(rename = "Breite")]
    latitude: String,
}

impl StationCatalog {
    /// Load the catalog from a dataset file.
    ///
    /// Fails if the file is missing or unreadable, a required column
    /// is absent, a retained row has a malformed code or coordinate,
    /// or two retained rows share a short code.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(path.as_ref())?;
        Self::from_csv(reader)
    }

    /// Load the catalog from an in-memory reader.
    ///
    /// Same rules as [`StationCatalog::load`]; used by tests to feed
    /// fixture data without touching the filesystem.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DataLoadError> {
        let reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, DataLoadError> {
        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn(column));
            }
        }

        let mut stations = HashMap::new();
        let mut rows = 0u64;

        for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
            // Header is line 1, so data rows start at line 2
            let row = idx as u64 + 2;
            let raw = result?;
            rows += 1;

            if raw.traffic != LONG_DISTANCE_MARKER {
                continue;
            }

            let code = StationCode::parse(&raw.code)
                .map_err(|source| DataLoadError::InvalidCode { row, source })?;

            let longitude = parse_decimal(&raw.longitude).ok_or_else(|| {
                DataLoadError::InvalidCoordinate {
                    row,
                    field: "Laenge",
                    value: raw.longitude.clone(),
                }
            })?;

            let latitude = parse_decimal(&raw.latitude).ok_or_else(|| {
                DataLoadError::InvalidCoordinate {
                    row,
                    field: "Breite",
                    value: raw.latitude.clone(),
                }
            })?;

            if stations.contains_key(&code) {
                return Err(DataLoadError::DuplicateCode { code });
            }

            stations.insert(
                code.clone(),
                StationRecord {
                    name: raw.name,
                    code,
                    coords: Coordinates::new(longitude, latitude),
                },
            );
        }

        tracing::info!(rows, kept = stations.len(), "station dataset loaded");

        Ok(Self::new(stations))
    }
}

/// Parse a decimal number that may use a comma as the decimal separator.
fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixture mirroring the real dataset's column layout.
    const DATA: &str = "\
EVA_NR;DS100;IFOPT;NAME;Verkehr;Laenge;Breite;Betreiber_Name
8011160;BL;de:11000:900003201;Berlin Hbf;FV;13,369549;52,525589;DB Station&Service AG
8002549;AH;de:02000:11943;Hamburg Hbf;FV;10,006;53,55313;DB Station&Service AG
8003200;KD;de:05913:19;Karlsruhe-Durlach;RV;8,464774;48,99845;DB Station&Service AG
8000105;FF;de:06412:10;Frankfurt(Main)Hbf;FV;8,663789;50,107145;DB Station&Service AG
";

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn keeps_only_long_distance_rows() {
        let catalog = StationCatalog::from_reader(DATA.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.find(&code("BL")).is_some());
        assert!(catalog.find(&code("AH")).is_some());
        assert!(catalog.find(&code("FF")).is_some());
        // Regional-only station is filtered out
        assert!(catalog.find(&code("KD")).is_none());
    }

    #[test]
    fn projects_name_and_coordinates() {
        let catalog = StationCatalog::from_reader(DATA.as_bytes()).unwrap();

        let berlin = catalog.find(&code("BL")).unwrap();
        assert_eq!(berlin.name, "Berlin Hbf");
        assert_eq!(berlin.code, code("BL"));
        // Comma decimals are normalized
        assert_eq!(berlin.coords.longitude, 13.369549);
        assert_eq!(berlin.coords.latitude, 52.525589);
    }

    #[test]
    fn unknown_code_is_absent() {
        let catalog = StationCatalog::from_reader(DATA.as_bytes()).unwrap();
        assert!(catalog.find(&code("ZZZZZ")).is_none());
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "\
EVA_NR;DS100;NAME;Verkehr;Laenge
8011160;BL;Berlin Hbf;FV;13,369549
";
        let err = StationCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Breite")));
    }

    #[test]
    fn bad_coordinate_is_an_error() {
        let data = "\
DS100;NAME;Verkehr;Laenge;Breite
BL;Berlin Hbf;FV;not-a-number;52,525589
";
        let err = StationCatalog::from_reader(data.as_bytes()).unwrap_err();
        match err {
            DataLoadError::InvalidCoordinate { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "Laenge");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bad_coordinate_on_skipped_row_is_ignored() {
        // Validation applies only to retained rows
        let data = "\
DS100;NAME;Verkehr;Laenge;Breite
KD;Karlsruhe-Durlach;RV;broken;also-broken
BL;Berlin Hbf;FV;13,369549;52,525589
";
        let catalog = StationCatalog::from_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn malformed_code_is_an_error() {
        let data = "\
DS100;NAME;Verkehr;Laenge;Breite
bl;Berlin Hbf;FV;13,369549;52,525589
";
        let err = StationCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidCode { row: 2, .. }));
    }

    #[test]
    fn duplicate_code_is_an_error() {
        let data = "\
DS100;NAME;Verkehr;Laenge;Breite
BL;Berlin Hbf;FV;13,369549;52,525589
BL;Berlin Hbf (tief);FV;13,369;52,525
";
        let err = StationCatalog::from_reader(data.as_bytes()).unwrap_err();
        match err {
            DataLoadError::DuplicateCode { code: c } => assert_eq!(c, code("BL")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATA.as_bytes()).unwrap();

        let catalog = StationCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StationCatalog::load(dir.path().join("no-such-file.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }
}
