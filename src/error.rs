use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// The reason a candidate is not a valid NHS number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Nothing was provided, or the empty string.
    #[error("empty")]
    Empty,

    #[error("numbers only")]
    NotNumeric,

    #[error("too short should be 10 characters")]
    TooShort,

    #[error("too long should be 10 characters")]
    TooLong,

    /// Any other length mismatch. `TooShort` and `TooLong` cover every case today.
    #[error("wrong length")]
    WrongLength,

    /// The final digit does not match the modulus-11 check digit of the first nine.
    #[error("checkdigit")]
    CheckDigitMismatch,
}

impl ErrorKind {
    /// Stable snake_case name, used for serialization and metric tags.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
