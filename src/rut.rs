mod identifier;

pub use identifier::{ParseRutError, Rut};

use thiserror::Error;

/// Shortest and longest accepted body, in digits, once separators are removed.
const RUT_MIN_BODY_LENGTH: usize = 7;
const RUT_MAX_BODY_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RutValidationError {
    /// The identifier is not 7 or 8 digits followed by a digit or `K`.
    #[error("The RUT does not have the expected format")]
    InvalidFormat,

    /// The identifier is well formed but its check character is wrong.
    #[error("The RUT check character does not match its digits")]
    InvalidRut,
}

/// Checks a Chilean RUT (`12.345.678-5`, `12345678-5`, `123456785`, ...).
///
/// Every `.` and `-` is removed before checking, wherever it appears. An empty
/// input is accepted: whether the value is required is decided by another rule.
pub fn validate_rut(input: &str) -> Result<(), RutValidationError> {
    if input.is_empty() {
        return Ok(());
    }

    let normalized = strip_separators(input);
    let (body, check_char) =
        split_check_char(&normalized).ok_or(RutValidationError::InvalidFormat)?;
    let expected = compute_check_char(body).ok_or(RutValidationError::InvalidFormat)?;

    if check_char.to_ascii_uppercase() == expected {
        Ok(())
    } else {
        Err(RutValidationError::InvalidRut)
    }
}

/// Same as [validate_rut], a missing value being treated as an empty one.
pub fn validate_rut_value(input: Option<&str>) -> Result<(), RutValidationError> {
    validate_rut(input.unwrap_or_default())
}

/// Computes the modulo-11 check character of a RUT body.
///
/// Returns `None` if the body is not made of 7 or 8 ASCII digits.
pub fn compute_check_char(body: &str) -> Option<char> {
    if !(RUT_MIN_BODY_LENGTH..=RUT_MAX_BODY_LENGTH).contains(&body.len())
        || !body.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    // Weights go 2, 3, 4, 5, 6, 7 then wrap, starting from the last digit
    let mut sum: u32 = 0;
    let mut multiplier: u32 = 2;
    for digit in body.bytes().rev().map(|b| u32::from(b - b'0')) {
        sum += digit * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    match 11 - sum % 11 {
        11 => Some('0'),
        10 => Some('K'),
        remainder => char::from_digit(remainder, 10),
    }
}

pub(crate) fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '.' | '-')).collect()
}

/// Splits a normalized RUT into its body and its (not yet uppercased) check character.
fn split_check_char(normalized: &str) -> Option<(&str, char)> {
    let check_char = normalized.chars().next_back()?;
    if !matches!(check_char, '0'..='9' | 'k' | 'K') {
        return None;
    }
    // The check character is ASCII, so it is a single byte
    Some((&normalized[..normalized.len() - 1], check_char))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_ruts() {
        let valid_ruts = vec![
            "12.345.678-5",
            "20.686.957-7",
            "15.123.456-9",
            "11.111.111-1",
            "7.654.321-6",
            // check character K, in both cases
            "12.345.670-K",
            "12.345.670-k",
            "1.000.005-K",
            // check character 0
            "10.000.004-0",
            "1000013-0",
            // no separators at all
            "123456785",
        ];
        for rut in valid_ruts {
            assert_eq!(validate_rut(rut), Ok(()));
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        let wrong_ruts = vec![
            "11.111.111-2",
            "12.345.678-4",
            "12.345.678-K",
            "12.345.670-0",
            "10.000.004-K",
            "20.686.957-0",
            // the hyphen is stripped, so the last body digit becomes the check character
            "12.345.678-",
        ];
        for rut in wrong_ruts {
            assert_eq!(validate_rut(rut), Err(RutValidationError::InvalidRut));
        }
    }

    #[test]
    fn test_malformed_ruts() {
        let malformed = vec![
            "ABC",
            // 6 digit body
            "123.456-7",
            // 9 digit body
            "123.456.789-0",
            // check character is not a digit nor K
            "12.345.678-X",
            // non digit in the body
            "12.3A5.678-5",
            // spaces are not stripped
            "12 345 678-5",
            // only separators
            "-",
            ".-.",
            // non ASCII digits
            "１２３４５６７８-5",
            "12.345.678-ñ",
        ];
        for rut in malformed {
            assert_eq!(validate_rut(rut), Err(RutValidationError::InvalidFormat));
        }
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert_eq!(validate_rut(""), Ok(()));
        assert_eq!(validate_rut_value(None), Ok(()));
        assert_eq!(validate_rut_value(Some("")), Ok(()));
        assert_eq!(
            validate_rut_value(Some("ABC")),
            Err(RutValidationError::InvalidFormat)
        );
    }

    #[test]
    fn separator_placement_does_not_change_the_verdict() {
        for rut in ["12345678-5", "1.234.5678-5", "12345678.-.5", "-1-2-3-4-5-6-7-8-5-"] {
            assert_eq!(validate_rut(rut), Ok(()));
        }
        for rut in ["12345678-4", "1.234.5678-4", "12345678.-.4"] {
            assert_eq!(validate_rut(rut), Err(RutValidationError::InvalidRut));
        }
    }

    #[test]
    fn test_compute_check_char() {
        // 8*2 + 7*3 + 6*4 + 5*5 + 4*6 + 3*7 + 2*2 + 1*3 = 138, 11 - 138 % 11 = 5
        assert_eq!(compute_check_char("12345678"), Some('5'));
        assert_eq!(compute_check_char("20686957"), Some('7'));
        assert_eq!(compute_check_char("12345670"), Some('K'));
        assert_eq!(compute_check_char("10000004"), Some('0'));
        assert_eq!(compute_check_char("1000005"), Some('K'));

        assert_eq!(compute_check_char("123456"), None);
        assert_eq!(compute_check_char("123456789"), None);
        assert_eq!(compute_check_char("1234567a"), None);
        assert_eq!(compute_check_char(""), None);
    }

    #[test]
    fn only_the_computed_check_char_is_accepted() {
        for check_char in ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'K'] {
            let rut = format!("12345678-{}", check_char);
            let expected = if check_char == '5' {
                Ok(())
            } else {
                Err(RutValidationError::InvalidRut)
            };
            assert_eq!(validate_rut(&rut), expected);
        }
    }

    #[test]
    fn can_be_called_from_many_threads() {
        let pool = threadpool::ThreadPool::new(4);
        let (sender, receiver) = std::sync::mpsc::channel();

        for body in 10_000_000u32..10_000_100 {
            let sender = sender.clone();
            pool.execute(move || {
                let body = body.to_string();
                let rut = format!("{}-{}", body, compute_check_char(&body).unwrap());
                sender.send(validate_rut(&rut)).unwrap();
            });
        }
        drop(sender);

        let results = receiver.iter().collect::<Vec<_>>();
        assert_eq!(results.len(), 100);
        assert!(results.iter().all(Result::is_ok));
    }
}
