//! Remote path segment property notations.

use crate::error::MetadataError;
use std::collections::BTreeSet;

/// A formatting notation for remote path segment properties.
///
/// `Array` emits `remote.path.segment[<index>]` style names, `Property` emits
/// `remote.path.segment.<index>` style names, and `None` emits nothing.
/// Selecting `None` alongside other notations does not suppress them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Notation {
    None,
    Array,
    Property,
}

impl Notation {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "ARRAY" => Some(Self::Array),
            "PROPERTY" => Some(Self::Property),
            _ => Option::None,
        }
    }

    /// Parse a comma-separated notation configuration.
    ///
    /// Tokens are trimmed and matched case-insensitively; duplicates
    /// collapse. Blank input yields the empty set, meaning no segment
    /// properties are emitted at all.
    pub fn parse_csv(input: &str) -> Result<BTreeSet<Self>, MetadataError> {
        let mut out = BTreeSet::new();

        if input.trim().is_empty() {
            return Ok(out);
        }

        for part in input.split(',') {
            let token = part.trim();
            match Self::from_token(token) {
                Some(value) => {
                    out.insert(value);
                }
                Option::None => {
                    return Err(MetadataError::InvalidNotation {
                        value: token.to_string(),
                        input: input.to_string(),
                    });
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_case_tokens() {
        let parsed = Notation::parse_csv("array, Property").unwrap();
        assert_eq!(
            parsed,
            BTreeSet::from([Notation::Array, Notation::Property])
        );
    }

    #[test]
    fn test_parse_single_token() {
        let parsed = Notation::parse_csv("none").unwrap();
        assert_eq!(parsed, BTreeSet::from([Notation::None]));
    }

    #[test]
    fn test_parse_none_does_not_suppress_siblings() {
        let parsed = Notation::parse_csv("NONE,array").unwrap();
        assert_eq!(parsed, BTreeSet::from([Notation::None, Notation::Array]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let parsed = Notation::parse_csv("array,ARRAY, Array").unwrap();
        assert_eq!(parsed, BTreeSet::from([Notation::Array]));
    }

    #[test]
    fn test_blank_input_yields_empty_set() {
        assert!(Notation::parse_csv("").unwrap().is_empty());
        assert!(Notation::parse_csv("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unrecognized_token_is_rejected_with_legal_values() {
        let err = Notation::parse_csv("bogus").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bogus"), "{message}");
        assert!(message.contains("NONE"), "{message}");
        assert!(message.contains("ARRAY"), "{message}");
        assert!(message.contains("PROPERTY"), "{message}");
    }

    #[test]
    fn test_bad_token_among_good_ones_is_rejected() {
        let err = Notation::parse_csv("array,weird,property").unwrap_err();
        assert!(matches!(
            err,
            MetadataError::InvalidNotation { ref value, .. } if value == "weird"
        ));
    }
}
