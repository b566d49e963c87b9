mod metrics;

use crate::candidate::Candidate;
use crate::config::ValidatorConfig;
use crate::secondary_validation::Validator;
use crate::validation::{validate, ValidationResult};
use crate::validator::metrics::Metrics;

/// Validates NHS numbers and reports the outcome of every call as metrics.
///
/// Metric handles are registered against the recorder installed when the
/// validator is created.
pub struct NhsNumberValidator {
    config: ValidatorConfig,
    metrics: Metrics,
}

impl NhsNumberValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        let metrics = Metrics::new(&config.labels);
        Self { config, metrics }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Same result as [crate::validate], with the outcome counted.
    pub fn validate<'a>(&self, candidate: impl Into<Candidate<'a>>) -> ValidationResult {
        let result = validate(candidate);
        self.metrics.record(&result);
        result
    }
}

impl Default for NhsNumberValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator for NhsNumberValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        self.validate(regex_match).is_valid()
    }
}
