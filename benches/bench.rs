use criterion::{criterion_group, criterion_main};

mod rut_checksum_benchmark {
    use criterion::{black_box, Criterion};
    use vcard_registry::{validate_rut, ChileanRutChecksum, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let ruts = vec![
            // valid
            "12.345.678-5",
            "20.686.957-7",
            "15.123.456-9",
            "12345670K",
            "1.000.005-k",
            // checksum mismatch
            "11.111.111-2",
            // malformed
            "ABC",
            "123.456.789-0",
        ];
        c.bench_function("rut-checksum", |b| {
            b.iter(|| {
                for rut in ruts.iter() {
                    let _ = black_box(validate_rut(black_box(rut)));
                }
            })
        });
        c.bench_function("rut-checksum-validator", |b| {
            b.iter(|| {
                for rut in ruts.iter() {
                    black_box(ChileanRutChecksum.is_valid_match(black_box(rut)));
                }
            })
        });
    }
}

mod form_benchmark {
    use criterion::{black_box, Criterion};
    use vcard_registry::{person_schema, sample_person_values};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let form = person_schema().build().unwrap();
        let samples = sample_person_values();

        c.bench_function("person-form-validation", |b| {
            b.iter(|| {
                for values in samples.iter() {
                    let _ = black_box(form.validate(black_box(values)));
                }
            })
        });
    }
}

criterion_group!(
    benches,
    rut_checksum_benchmark::criterion_benchmark,
    form_benchmark::criterion_benchmark
);
criterion_main!(benches);
