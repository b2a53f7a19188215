//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid station short code (DS100-style).
///
/// Short codes are 1 to 6 uppercase ASCII letters or digits. This type
/// guarantees that any `StationCode` value is valid by construction.
/// Lookups against the catalog are exact and case-sensitive, so a
/// lowercase code is rejected here rather than silently never matching.
///
/// # Examples
///
/// ```
/// use distance_server::domain::StationCode;
///
/// let berlin = StationCode::parse("BL").unwrap();
/// assert_eq!(berlin.as_str(), "BL");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("bl").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("").is_err());
/// assert!(StationCode::parse("ABCDEFG").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Maximum length of a short code.
    pub const MAX_LEN: usize = 6;

    /// Parse a station code from a string.
    ///
    /// The input must be 1 to 6 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if bytes.len() > Self::MAX_LEN {
            return Err(InvalidStationCode {
                reason: "must be at most 6 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
