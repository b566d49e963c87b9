use std::collections::HashMap;

use metrics::{counter, Counter};
use strum::IntoEnumIterator;

use crate::error::ErrorKind;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::validation::ValidationResult;

pub struct Metrics {
    pub valid_validations: Counter,
    pub invalid_validations: Counter,
    validation_errors: HashMap<ErrorKind, Counter>,
}

const OUTCOME: &str = "outcome";
const ERROR: &str = "error";

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            valid_validations: counter!(
                "nhs_number.validations",
                labels.clone_with_labels(&[(OUTCOME, "valid")])
            ),
            invalid_validations: counter!(
                "nhs_number.validations",
                labels.clone_with_labels(&[(OUTCOME, "invalid")])
            ),
            validation_errors: ErrorKind::iter()
                .map(|kind| {
                    let counter = counter!(
                        "nhs_number.validation_errors",
                        labels.clone_with_labels(&[(ERROR, kind.as_str())])
                    );
                    (kind, counter)
                })
                .collect(),
        }
    }

    pub fn record(&self, result: &ValidationResult) {
        match result.error() {
            None => self.valid_validations.increment(1),
            Some(kind) => {
                self.invalid_validations.increment(1);
                if let Some(counter) = self.validation_errors.get(&kind) {
                    counter.increment(1);
                }
            }
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&NO_LABEL)
    }
}
