use serde::Serialize;
use thiserror::Error;

use crate::form::metrics::FormMetrics;
use crate::form::rule::{FieldError, FieldRule};
use crate::form::schema::FormSchema;
use crate::form::values::FormValues;
use crate::observability::labels::Labels;
use crate::stats::GLOBAL_STATS;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub error: FieldError,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) of the form are invalid", .violations.len())]
pub struct FormValidationError {
    /// At most one violation per field, in the order of the schema
    pub violations: Vec<FieldViolation>,
}

impl FormValidationError {
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.violations
            .iter()
            .find(|violation| violation.field == field)
            .map(|violation| &violation.error)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.violations
            .iter()
            .map(|violation| violation.field.as_str())
    }
}

/// A [FormSchema] ready to check submitted values.
pub struct FormValidator {
    schema: FormSchema,
    metrics: FormMetrics,
}

impl FormValidator {
    pub(crate) fn new(schema: FormSchema, labels: Labels) -> Self {
        GLOBAL_STATS.form_validator_creations.increment(1);
        let metrics = FormMetrics::new(&labels, &schema);
        FormValidator { schema, metrics }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Runs the rules of every field. The rules of a field stop at its first failure.
    ///
    /// Values of fields that are not in the schema are ignored.
    pub fn validate(&self, values: &FormValues) -> Result<(), FormValidationError> {
        self.metrics.submissions.increment(1);

        let mut violations = vec![];
        for (field, error_counter) in self.schema.fields.iter().zip(&self.metrics.field_errors) {
            let value = values.get(&field.name);
            for rule in &field.rules {
                let result = rule.check(value);
                if *rule == FieldRule::ChileanRut {
                    self.metrics.rut.record(&result);
                }
                if let Err(error) = result {
                    error_counter.increment(1);
                    violations.push(FieldViolation {
                        field: field.name.clone(),
                        error,
                    });
                    break;
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            self.metrics.rejected_submissions.increment(1);
            Err(FormValidationError { violations })
        }
    }
}
