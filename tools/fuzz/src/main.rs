use afl::fuzz;
use nhs_number_validator::{validate, NhsCheckDigit, NhsNumber, Validator};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;

    let result = validate(input);
    assert_eq!(result.error().is_some(), !result.is_valid());
    assert_eq!(validate(input), result);
    assert_eq!(NhsCheckDigit.is_valid_match(input), result.is_valid());

    match NhsNumber::parse(input) {
        Ok(nhs_number) => {
            assert!(result.is_valid());
            assert_eq!(nhs_number.as_str().len(), 10);
            assert!(nhs_number.as_str().bytes().all(|b| b.is_ascii_digit()));
            // the canonical form must validate on its own
            assert!(validate(nhs_number.as_str()).is_valid());
        }
        Err(error) => assert_eq!(result.error(), Some(error)),
    }

    // Numeric inputs take the same path as their decimal text
    if let Ok(number) = input.parse::<u64>() {
        assert_eq!(validate(number), validate(number.to_string()));
    }
    Some(())
}
