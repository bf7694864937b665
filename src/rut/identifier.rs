use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use crate::rut::{compute_check_char, strip_separators, validate_rut, RutValidationError};

const LOWEST_BODY: u32 = 1_000_000;
const HIGHEST_BODY: u32 = 99_999_999;

/// A checksum-valid RUT.
///
/// Displayed in its grouped form (`12.345.678-5`). The alternate flag (`{:#}`)
/// gives the compact form (`12345678-5`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Rut {
    body: String,
    check_char: char,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseRutError {
    #[error("A RUT can not be empty")]
    Empty,

    #[error(transparent)]
    Invalid(#[from] RutValidationError),
}

impl Rut {
    /// Builds the RUT of a body number, computing its check character.
    pub fn from_body(body: u32) -> Option<Rut> {
        if !(LOWEST_BODY..=HIGHEST_BODY).contains(&body) {
            return None;
        }
        let body = body.to_string();
        let check_char = compute_check_char(&body)?;
        Some(Rut { body, check_char })
    }

    /// The digits of the RUT, without the check character.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Always a digit or an uppercase `K`.
    pub fn check_char(&self) -> char {
        self.check_char
    }

    pub fn number(&self) -> u32 {
        // The body is 7 or 8 ASCII digits
        self.body
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl FromStr for Rut {
    type Err = ParseRutError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(ParseRutError::Empty);
        }
        validate_rut(input)?;

        let mut body = strip_separators(input);
        let check_char = body
            .pop()
            .ok_or(ParseRutError::Invalid(RutValidationError::InvalidFormat))?
            .to_ascii_uppercase();
        Ok(Rut { body, check_char })
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return write!(f, "{}-{}", self.body, self.check_char);
        }

        // Groups of 3 digits counted from the right
        let first_group_len = match self.body.len() % 3 {
            0 => 3,
            len => len,
        };
        let (first_group, rest) = self.body.split_at(first_group_len);
        f.write_str(first_group)?;
        for group in rest.as_bytes().chunks(3) {
            f.write_str(".")?;
            // chunks of an ASCII string are valid UTF-8
            f.write_str(std::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        write!(f, "-{}", self.check_char)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_parse_and_display() {
        let test_cases = vec![
            ("12.345.678-5", "12.345.678-5", "12345678-5"),
            ("123456785", "12.345.678-5", "12345678-5"),
            ("20686957-7", "20.686.957-7", "20686957-7"),
            ("7.654.321-6", "7.654.321-6", "7654321-6"),
            ("12.345.670-k", "12.345.670-K", "12345670-K"),
        ];

        for (input, grouped, compact) in test_cases {
            let rut: Rut = input.parse().unwrap();
            assert_eq!(rut.to_string(), grouped);
            assert_eq!(format!("{:#}", rut), compact);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Rut>(), Err(ParseRutError::Empty));
        assert_eq!(
            "ABC".parse::<Rut>(),
            Err(ParseRutError::Invalid(RutValidationError::InvalidFormat))
        );
        assert_eq!(
            "11.111.111-2".parse::<Rut>(),
            Err(ParseRutError::Invalid(RutValidationError::InvalidRut))
        );
    }

    #[test]
    fn test_accessors() {
        let rut: Rut = "12.345.670-k".parse().unwrap();
        assert_eq!(rut.body(), "12345670");
        assert_eq!(rut.number(), 12_345_670);
        assert_eq!(rut.check_char(), 'K');
    }

    #[test]
    fn test_from_body() {
        assert_eq!(Rut::from_body(12_345_678).unwrap().to_string(), "12.345.678-5");
        assert_eq!(Rut::from_body(1_000_005).unwrap().to_string(), "1.000.005-K");
        assert_eq!(Rut::from_body(10_000_004).unwrap().check_char(), '0');
        assert_eq!(Rut::from_body(999_999), None);
        assert_eq!(Rut::from_body(100_000_000), None);
    }

    #[test]
    fn from_body_agrees_with_parsing() {
        for body in (LOWEST_BODY..LOWEST_BODY + 200).chain(HIGHEST_BODY - 200..=HIGHEST_BODY) {
            let rut = Rut::from_body(body).unwrap();
            assert_eq!(rut.to_string().parse::<Rut>(), Ok(rut.clone()));
            assert_eq!(rut.number(), body);
        }
    }

    #[test]
    fn test_serde_representation() {
        let rut: Rut = "20686957-7".parse().unwrap();
        assert_tokens(&rut, &[Token::Str("20.686.957-7")]);

        assert_de_tokens_error::<Rut>(
            &[Token::Str("11.111.111-2")],
            "The RUT check character does not match its digits",
        );
    }
}
