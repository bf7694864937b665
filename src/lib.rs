// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod form;
mod observability;
mod registration;
mod rut;
mod secondary_validation;
mod stats;

// This is the public API of the library
pub use form::{
    person_schema, pet_schema, sample_person_values, sample_pet_values, FieldConfig, FieldError,
    FieldRule, FieldViolation, FormConfigError, FormSchema, FormValidationError, FormValidator,
    FormValues,
};
pub use observability::labels::Labels;
pub use registration::{
    format_card_date, CardRecord, CardType, ImageAttachment, ImageError, RegisterRequest,
    RegistrationClient, RegistrationConfig, RegistrationError, ALLOWED_IMAGE_TYPES,
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SEC, MAX_IMAGE_SIZE, NO_CARD_DATA, UNKNOWN_DATE,
};
pub use rut::{
    compute_check_char, validate_rut, validate_rut_value, ParseRutError, Rut, RutValidationError,
};
pub use secondary_validation::{ChileanRutChecksum, Validator};
