mod metrics;
mod rule;
mod samples;
mod schema;
mod validator;
mod values;

pub use rule::{FieldError, FieldRule};
pub use samples::{person_schema, pet_schema, sample_person_values, sample_pet_values};
pub use schema::{FieldConfig, FormConfigError, FormSchema};
pub use validator::{FieldViolation, FormValidationError, FormValidator};
pub use values::FormValues;
