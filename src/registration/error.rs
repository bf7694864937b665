use thiserror::Error;

use crate::form::FormValidationError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The values were rejected by the form, nothing was sent
    #[error("The form is not valid: {0}")]
    Validation(#[from] FormValidationError),

    /// No response at all (server down, timeout, refused connection, ...)
    #[error("Could not connect to the registration service: {0}")]
    Connection(String),

    /// The service refused the origin of the request
    #[error("The registration service does not allow requests from this origin")]
    Forbidden,

    #[error("No card found for `{0}`")]
    NotFound(String),

    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("`{0}` is not a valid card identifier")]
    InvalidNanoId(String),

    #[error("The card returned by the registration service could not be read: {0}")]
    Decode(String),

    #[error("Could not encode the registration: {0}")]
    Encode(String),

    #[error("Could not create the HTTP client: {0}")]
    Client(String),
}

impl From<RegistrationError> for i64 {
    fn from(value: RegistrationError) -> i64 {
        match value {
            RegistrationError::Validation(_) => -2,
            RegistrationError::Connection(_) => -3,
            RegistrationError::Forbidden => -4,
            RegistrationError::NotFound(_) => -5,
            RegistrationError::Status { .. } => -6,
            RegistrationError::InvalidNanoId(_) => -7,
            RegistrationError::Decode(_) => -8,
            RegistrationError::Encode(_) => -9,
            RegistrationError::Client(_) => -10,
        }
    }
}
