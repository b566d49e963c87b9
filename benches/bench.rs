use criterion::{criterion_group, criterion_main};

mod nhs_check_digit_benchmark {
    use criterion::{black_box, Criterion};
    use nhs_number_validator::{validate, NhsCheckDigit, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let nhs_numbers = vec![
            "1234567881",
            "9077844449",
            "798 428 4334",
            "111 431 1456",
            "095 558 1001",
            "6492618610",
            // invalid
            "1234567890",
            "12345678810",
            "abcdefghij",
        ];
        c.bench_function("nhs-check-digit", |b| {
            b.iter(|| {
                for nhs_number in nhs_numbers.iter() {
                    black_box(NhsCheckDigit.is_valid_match(nhs_number));
                }
            })
        });

        c.bench_function("nhs-validate-integer", |b| {
            b.iter(|| validate(black_box(9434765919u64)))
        });
    }
}

mod nhs_number_validator_benchmark {
    use criterion::{black_box, Criterion};
    use nhs_number_validator::{Labels, NhsNumberValidator, ValidatorConfig};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let validator = NhsNumberValidator::new(
            ValidatorConfig::new().labels(Labels::new(&[("service", "bench")])),
        );
        c.bench_function("nhs-validator-with-metrics", |b| {
            b.iter(|| validator.validate(black_box("943 476 5919")))
        });
    }
}

criterion_group!(
    benches,
    nhs_check_digit_benchmark::criterion_benchmark,
    nhs_number_validator_benchmark::criterion_benchmark
);
criterion_main!(benches);
