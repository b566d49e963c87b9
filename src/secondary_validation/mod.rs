mod nhs_check_digit;

pub use crate::secondary_validation::nhs_check_digit::NhsCheckDigit;
pub(crate) use crate::secondary_validation::nhs_check_digit::compute_check_digit;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}
