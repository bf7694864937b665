use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::rut::{validate_rut_value, RutValidationError};

const EMAIL_MAX_LENGTH: usize = 254;
const EMAIL_LOCAL_PART_MAX_LENGTH: usize = 64;

lazy_static! {
    // Same shape as the email check of browser form frameworks, length limits are checked apart
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// A check applied to the value of a single form field.
///
/// Only [FieldRule::Required] rejects a missing or empty value, every other rule
/// lets it through so rules can be combined freely.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum FieldRule {
    Required,
    MinLength { min_length: usize },
    Email,
    ChileanRut,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[serde(tag = "code")]
pub enum FieldError {
    #[strum(serialize = "required")]
    #[serde(rename = "required")]
    #[error("This field is required")]
    Required,

    #[strum(serialize = "minlength")]
    #[serde(rename = "minlength")]
    #[error("Must be at least {required} characters long")]
    MinLength { required: usize, actual: usize },

    #[strum(serialize = "email")]
    #[serde(rename = "email")]
    #[error("Must be a valid email address")]
    Email,

    #[strum(serialize = "invalidFormat")]
    #[serde(rename = "invalidFormat")]
    #[error("The RUT must look like 12.345.678-5")]
    InvalidFormat,

    #[strum(serialize = "invalidRut")]
    #[serde(rename = "invalidRut")]
    #[error("The RUT is not valid, check its digits")]
    InvalidRut,
}

impl FieldError {
    /// Stable identifier of the error, for callers that pick their own message
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl From<RutValidationError> for FieldError {
    fn from(err: RutValidationError) -> Self {
        match err {
            RutValidationError::InvalidFormat => Self::InvalidFormat,
            RutValidationError::InvalidRut => Self::InvalidRut,
        }
    }
}

impl FieldRule {
    pub fn check(&self, value: Option<&str>) -> Result<(), FieldError> {
        let value = value.unwrap_or_default();
        match self {
            FieldRule::Required => {
                if value.is_empty() {
                    Err(FieldError::Required)
                } else {
                    Ok(())
                }
            }
            FieldRule::MinLength { min_length } => {
                let actual = value.chars().count();
                if !value.is_empty() && actual < *min_length {
                    Err(FieldError::MinLength {
                        required: *min_length,
                        actual,
                    })
                } else {
                    Ok(())
                }
            }
            FieldRule::Email => {
                if value.is_empty() || is_valid_email(value) {
                    Ok(())
                } else {
                    Err(FieldError::Email)
                }
            }
            FieldRule::ChileanRut => Ok(validate_rut_value(Some(value))?),
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    match value.split_once('@') {
        Some((local_part, _)) if local_part.len() <= EMAIL_LOCAL_PART_MAX_LENGTH => {
            EMAIL_REGEX.is_match(value)
        }
        _ => false,
    }
}
