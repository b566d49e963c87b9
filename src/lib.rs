// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod candidate;
mod config;
mod error;
mod nhs_number;
mod observability;
mod secondary_validation;
mod validation;
mod validator;

// This is the public API of the NHS number validator
pub use candidate::Candidate;
pub use config::ValidatorConfig;
pub use error::ErrorKind;
pub use nhs_number::NhsNumber;
pub use observability::labels::Labels;
pub use secondary_validation::{NhsCheckDigit, Validator};
pub use validation::{validate, ValidationResult, NHS_NUMBER_LENGTH};
pub use validator::NhsNumberValidator;
