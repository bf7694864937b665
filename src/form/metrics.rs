use metrics::{counter, Counter};

use crate::form::rule::FieldError;
use crate::form::schema::FormSchema;
use crate::observability::labels::Labels;

const FORM: &str = "form";
const FIELD: &str = "field";

pub struct FormMetrics {
    pub submissions: Counter,
    pub rejected_submissions: Counter,
    /// One counter per field, in the order of the schema
    pub field_errors: Vec<Counter>,
    pub rut: RutMetrics,
}

pub struct RutMetrics {
    // Every value checked by a RUT rule, empty values included
    pub validations: Counter,
    pub invalid_format: Counter,
    pub invalid_rut: Counter,
}

impl FormMetrics {
    pub fn new(labels: &Labels, schema: &FormSchema) -> Self {
        let labels = labels.extended(&[(FORM, schema.name.clone())]);
        FormMetrics {
            submissions: counter!("form.submissions", labels.clone()),
            rejected_submissions: counter!("form.rejected_submissions", labels.clone()),
            field_errors: schema
                .field_names()
                .map(|name| {
                    counter!(
                        "form.field_errors",
                        labels.extended(&[(FIELD, name.to_string())])
                    )
                })
                .collect(),
            rut: RutMetrics::new(&labels),
        }
    }
}

impl RutMetrics {
    pub fn new(labels: &Labels) -> Self {
        RutMetrics {
            validations: counter!("rut.validations", labels.clone()),
            invalid_format: counter!("rut.invalid_format", labels.clone()),
            invalid_rut: counter!("rut.invalid_rut", labels.clone()),
        }
    }

    pub fn record(&self, result: &Result<(), FieldError>) {
        self.validations.increment(1);
        match result {
            Err(FieldError::InvalidFormat) => self.invalid_format.increment(1),
            Err(FieldError::InvalidRut) => self.invalid_rut.increment(1),
            _ => {}
        }
    }
}
