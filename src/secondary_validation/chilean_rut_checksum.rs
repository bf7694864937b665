use crate::rut::validate_rut;
use crate::secondary_validation::Validator;

/// Checks that a match is a complete, checksum-valid Chilean RUT
pub struct ChileanRutChecksum;

impl Validator for ChileanRutChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        // An empty match has no RUT in it, even if the form rule lets it through
        !regex_match.is_empty() && validate_rut(regex_match).is_ok()
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn test_valid_chilean_ruts() {
        let valid_ids = vec![
            "12.345.678-5",
            "20.686.957-7",
            "15.123.456-9",
            "12345670K",
            // Same with lowercase k should work
            "12345670k",
        ];
        for id in valid_ids {
            assert!(ChileanRutChecksum.is_valid_match(id));
        }
    }

    #[test]
    fn test_invalid_chilean_ruts() {
        let invalid_ids = vec![
            // wrong checksum
            "12.345.678-4",
            // non digit characters
            "12.345.67a-5",
            // wrong length
            "123.456.789-5",
            // Non utf-8 characters
            "12.345.678-Àñô",
            // nothing to check
            "",
            "..--",
        ];
        for id in invalid_ids {
            assert!(!ChileanRutChecksum.is_valid_match(id));
        }
    }
}
