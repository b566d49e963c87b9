use crate::secondary_validation::Validator;
use crate::validation::validate;

pub struct NhsCheckDigit;

const MODULUS: u32 = 11;

impl Validator for NhsCheckDigit {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        // https://www.datadictionary.nhs.uk/attributes/nhs_number.html
        // The NHS number is a 10-digit number in the format 123 456 7890.
        validate(regex_match).is_valid()
    }
}

/// Computes the expected check digit for the first nine digits of an NHS number.
///
/// A remainder of 1 yields 10, which can never match a single digit.
pub(crate) fn compute_check_digit(digits: &[u32]) -> u32 {
    let remainder = digits
        .iter()
        .enumerate()
        .map(|(index, digit)| multiply_by_position(*digit, index))
        .fold(0, add_together)
        % MODULUS;

    match MODULUS - remainder {
        11 => 0,
        check_digit => check_digit,
    }
}

/// Weights a digit by 11 minus its 1-indexed position, so 10 down to 2 over nine digits.
fn multiply_by_position(digit: u32, index: usize) -> u32 {
    digit * (MODULUS - (index as u32 + 1))
}

fn add_together(previous_value: u32, current_value: u32) -> u32 {
    previous_value + current_value
}
