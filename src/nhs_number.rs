use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::ErrorKind;
use crate::validation::{canonicalize, NHS_NUMBER_LENGTH};

/// An NHS number that passed validation, stored as its 10-digit canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NhsNumber(String);

impl NhsNumber {
    pub fn parse<'a>(candidate: impl Into<Candidate<'a>>) -> Result<Self, ErrorKind> {
        let candidate = candidate.into();
        let canonical = canonicalize(&candidate)?;
        Ok(NhsNumber(canonical.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn check_digit(&self) -> u32 {
        // The canonical form only holds ASCII digits
        u32::from(self.0.as_bytes()[NHS_NUMBER_LENGTH - 1] - b'0')
    }
}

impl FromStr for NhsNumber {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NhsNumber::parse(s)
    }
}

impl TryFrom<String> for NhsNumber {
    type Error = ErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NhsNumber::parse(value)
    }
}

impl TryFrom<&str> for NhsNumber {
    type Error = ErrorKind;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NhsNumber::parse(value)
    }
}

impl From<NhsNumber> for String {
    fn from(value: NhsNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for NhsNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NhsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
