//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// Longest station code the dataset uses (e.g. "CSMT", "MAS", "SBC").
const MAX_LEN: usize = 5;

/// A valid station code: 1 to 5 uppercase ASCII letters or digits.
///
/// # Examples
///
/// ```
/// use train_search::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected by the strict parser
/// assert!(StationCode::parse("ndls").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("").is_err());
/// assert!(StationCode::parse("ABCDEF").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 1 to 5 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let raw = s.as_bytes();

        if raw.is_empty() || raw.len() > MAX_LEN {
            return Err(InvalidStationCode {
                reason: "must be 1 to 5 characters",
            });
        }

        if !raw
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        let mut bytes = [0u8; MAX_LEN];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Parse a code after trimming whitespace and converting to uppercase.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_uppercase())
    }

    /// Extract a code from user input.
    ///
    /// Autocomplete labels look like `"New Delhi (NDLS)"`; the code is the
    /// content of the first parenthesised group. Input without parentheses
    /// is treated as a bare code.
    ///
    /// ```
    /// use train_search::domain::StationCode;
    ///
    /// let code = StationCode::from_input("New Delhi (NDLS)").unwrap();
    /// assert_eq!(code.as_str(), "NDLS");
    ///
    /// let code = StationCode::from_input(" hwh ").unwrap();
    /// assert_eq!(code.as_str(), "HWH");
    /// ```
    pub fn from_input(text: &str) -> Result<Self, InvalidStationCode> {
        let candidate = match text.find('(') {
            Some(open) => {
                let rest = &text[open + 1..];
                let close = rest.find(')').ok_or(InvalidStationCode {
                    reason: "unterminated parenthesis",
                })?;
                &rest[..close]
            }
            None => text,
        };
        Self::parse_normalized(candidate)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored, so this cannot fail.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("NDLS").is_ok());
        assert!(StationCode::parse("HWH").is_ok());
        assert!(StationCode::parse("CSMT").is_ok());
        assert!(StationCode::parse("A").is_ok());
        assert!(StationCode::parse("KCG2").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("ndls").is_err());
        assert!(StationCode::parse("Ndls").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("ABCDEF").is_err());
    }

    #[test]
    fn reject_punctuation() {
        assert!(StationCode::parse("N-D").is_err());
        assert!(StationCode::parse("N D").is_err());
        assert!(StationCode::parse("NDÖ").is_err());
    }

    #[test]
    fn parse_normalized_trims_and_uppercases() {
        let code = StationCode::parse_normalized("  ndls ").unwrap();
        assert_eq!(code.as_str(), "NDLS");
    }

    #[test]
    fn from_input_reads_parenthesised_code() {
        let code = StationCode::from_input("Howrah Jn (hwh)").unwrap();
        assert_eq!(code.as_str(), "HWH");
    }

    #[test]
    fn from_input_uses_first_group() {
        let code = StationCode::from_input("Delhi (DLI) (NDLS)").unwrap();
        assert_eq!(code.as_str(), "DLI");
    }

    #[test]
    fn from_input_rejects_unterminated_group() {
        assert!(StationCode::from_input("Howrah (HWH").is_err());
    }

    #[test]
    fn from_input_rejects_empty() {
        assert!(StationCode::from_input("").is_err());
        assert!(StationCode::from_input("Somewhere ()").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("MAS").unwrap();
        assert_eq!(format!("{}", code), "MAS");
        assert_eq!(format!("{:?}", code), "StationCode(MAS)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationCode::parse("NDLS").unwrap());
        assert!(set.contains(&StationCode::parse("NDLS").unwrap()));
        assert!(!set.contains(&StationCode::parse("NDL").unwrap()));
    }
}
