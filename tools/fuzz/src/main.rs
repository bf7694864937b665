use afl::fuzz;
use rand::{rngs::StdRng, Rng, SeedableRng};
use vcard_registry::{validate_rut, ChileanRutChecksum, Rut, RutValidationError, Validator};

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

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

/// Sprinkles `.` and `-` between the characters of the input
fn add_random_separators(input: &str, rng: &mut StdRng) -> String {
    let mut output = String::new();
    for c in input.chars() {
        while rng.gen_bool(0.2) {
            output.push(if rng.gen_bool(0.5) { '.' } else { '-' });
        }
        output.push(c);
    }
    output
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let verdict = validate_rut(input);

    // Separators are ignored, wherever they are
    let reformatted = add_random_separators(input, &mut rng);
    if !input.is_empty() {
        assert_eq!(verdict, validate_rut(&reformatted));
    }

    assert_eq!(
        ChileanRutChecksum.is_valid_match(input),
        !input.is_empty() && verdict.is_ok()
    );

    match input.parse::<Rut>() {
        Ok(rut) => {
            assert_eq!(verdict, Ok(()));
            // Both display forms parse back to the same RUT
            assert_eq!(rut.to_string().parse::<Rut>(), Ok(rut.clone()));
            assert_eq!(format!("{:#}", rut).parse::<Rut>(), Ok(rut));
        }
        Err(_) => assert!(input.is_empty() || verdict != Ok::<(), RutValidationError>(())),
    }
}
