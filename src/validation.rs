use std::borrow::Cow;

use serde::Serialize;

use crate::candidate::Candidate;
use crate::error::ErrorKind;
use crate::secondary_validation::compute_check_digit;

/// Number of digits in an NHS number, check digit included.
pub const NHS_NUMBER_LENGTH: usize = 10;

/// Outcome of a single validation. `error` is set if and only if `valid` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorKind>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: ErrorKind) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }
}

impl From<ValidationResult> for Result<(), ErrorKind> {
    fn from(result: ValidationResult) -> Self {
        match result.error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

/// Checks that a candidate is a well-formed NHS number with a matching
/// modulus-11 check digit.
///
/// Checks run in order and the first failure is reported:
/// emptiness, numeric content, length, and finally the check digit.
pub fn validate<'a>(candidate: impl Into<Candidate<'a>>) -> ValidationResult {
    match canonicalize(&candidate.into()) {
        Ok(_) => ValidationResult::valid(),
        Err(error) => ValidationResult::invalid(error),
    }
}

/// Runs every check and returns the canonical 10-digit string on success.
pub(crate) fn canonicalize<'c>(candidate: &'c Candidate<'_>) -> Result<Cow<'c, str>, ErrorKind> {
    if candidate.is_empty() {
        return Err(ErrorKind::Empty);
    }

    let normalized = candidate.normalized().ok_or(ErrorKind::NotNumeric)?;
    if !is_numeric(&normalized) {
        return Err(ErrorKind::NotNumeric);
    }

    // Numeric strings are ASCII, so the byte length is the character count
    if normalized.len() < NHS_NUMBER_LENGTH {
        return Err(ErrorKind::TooShort);
    }
    if normalized.len() > NHS_NUMBER_LENGTH {
        return Err(ErrorKind::TooLong);
    }
    if normalized.len() != NHS_NUMBER_LENGTH {
        return Err(ErrorKind::WrongLength);
    }

    // Signs, decimal points, exponents and radix prefixes pass the numeric
    // check but can't take part in the checksum.
    let digits = normalized
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
        .ok_or(ErrorKind::CheckDigitMismatch)?;

    let (payload, provided_check_digit) = digits.split_at(NHS_NUMBER_LENGTH - 1);
    if provided_check_digit != [compute_check_digit(payload)] {
        return Err(ErrorKind::CheckDigitMismatch);
    }

    Ok(normalized)
}

const INFINITY_SPELLINGS: &[&str] = &["Infinity", "+Infinity", "-Infinity"];

/// Accepts decimal numbers (overflow to infinity included), the exact `Infinity`
/// spellings and unsigned `0x`/`0o`/`0b` integers. NaN is the only rejected value.
///
/// A whitespace-only input normalizes to the empty string, which counts as zero.
fn is_numeric(normalized: &str) -> bool {
    if normalized.is_empty()
        || INFINITY_SPELLINGS.contains(&normalized)
        || is_prefixed_integer(normalized)
    {
        return true;
    }

    // `f64::from_str` also takes "inf", "infinity" and "nan" in any case
    if normalized
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return false;
    }

    normalized.parse::<f64>().is_ok_and(|value| !value.is_nan())
}

fn is_prefixed_integer(normalized: &str) -> bool {
    let radix = match normalized.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return false,
    };
    let digits = &normalized[2..];
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}
