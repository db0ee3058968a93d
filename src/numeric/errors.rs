// ============================================================================
// Codec Errors
// Range and syntax failures of the numeral codec
// ============================================================================

use std::fmt;

/// Why a value cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolation {
    /// Value is below zero
    Negative,
    /// Value exceeds the largest encodable numeral
    TooLarge,
    /// Value is NaN or infinite
    NotFinite,
    /// Value has no exact spelling in the numeral table in use
    Unrepresentable,
}

/// Errors raised by encoding or decoding.
///
/// There are exactly two kinds: a range error from the encoder and a
/// syntax error from the decoder. Neither carries a partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The value cannot be written as a numeral
    OutOfRange { value: f64, reason: RangeViolation },

    /// The text is not a canonical numeral
    Malformed {
        /// The text as given by the caller
        numeral: String,
        /// Unconsumed tail, after whitespace stripping and `M` normalization
        remainder: String,
        /// Char offset into `numeral` where `remainder` starts
        index: usize,
        /// Last symbol matched before the walk gave up
        last: Option<String>,
    },
}

impl CodecError {
    pub(crate) fn out_of_range(value: f64, reason: RangeViolation) -> Self {
        CodecError::OutOfRange { value, reason }
    }

    /// True for encoder range failures.
    pub fn is_range_error(&self) -> bool {
        matches!(self, CodecError::OutOfRange { .. })
    }

    /// True for decoder syntax failures.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, CodecError::Malformed { .. })
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::OutOfRange { value, reason } => match reason {
                RangeViolation::Negative => {
                    write!(f, "cannot encode negative numbers (got {})", value)
                },
                RangeViolation::TooLarge => write!(
                    f,
                    "cannot encode numbers > {} (got {})",
                    super::NUMERUS_MAXIMUS,
                    value
                ),
                RangeViolation::NotFinite => {
                    write!(f, "cannot encode non-finite value {}", value)
                },
                RangeViolation::Unrepresentable => {
                    write!(f, "numeral table cannot write {} exactly", value)
                },
            },
            CodecError::Malformed {
                numeral,
                remainder,
                index,
                last,
            } => {
                let next = remainder.chars().next().unwrap_or_default();
                match last {
                    Some(last) => write!(
                        f,
                        "invalid roman numeral: {}; {} can't be after {} at index {} ({} remains)",
                        numeral, next, last, index, remainder
                    ),
                    None => write!(
                        f,
                        "invalid roman numeral: {}; {} can't start a numeral at index {} ({} remains)",
                        numeral, next, index, remainder
                    ),
                }
            },
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::out_of_range(-1.0, RangeViolation::Negative);
        assert_eq!(err.to_string(), "cannot encode negative numbers (got -1)");

        let err = CodecError::out_of_range(25.0, RangeViolation::Unrepresentable);
        assert_eq!(err.to_string(), "numeral table cannot write 25 exactly");
        assert!(err.is_range_error());

        let err = CodecError::Malformed {
            numeral: "CMCMCMC".to_string(),
            remainder: "CMCMC".to_string(),
            index: 2,
            last: Some("CM".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid roman numeral: CMCMCMC; C can't be after CM at index 2 (CMCMC remains)"
        );
    }

    #[test]
    fn test_error_kind() {
        let range = CodecError::out_of_range(f64::NAN, RangeViolation::NotFinite);
        assert!(range.is_range_error());
        assert!(!range.is_syntax_error());

        let syntax = CodecError::Malformed {
            numeral: "Q".to_string(),
            remainder: "Q".to_string(),
            index: 0,
            last: None,
        };
        assert!(syntax.is_syntax_error());
        assert!(syntax.to_string().contains("can't start a numeral"));
    }
}
