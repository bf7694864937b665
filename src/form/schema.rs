use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::rule::FieldRule;
use crate::form::validator::FormValidator;
use crate::observability::labels::Labels;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

/// Describes a form: its fields, in display order, and the rules of each field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum FormConfigError {
    #[error("The form name must not be empty")]
    EmptyFormName,

    #[error("Field names must not be empty")]
    EmptyFieldName,

    #[error("The field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("The minimum length of field `{0}` must be non-zero")]
    MinLengthZero(String),
}

impl FormSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            fields: vec![],
        }
    }

    /// Adds a field at the end of the form
    pub fn field(&self, name: &str, rules: Vec<FieldRule>) -> Self {
        self.mutate_clone(|x| {
            x.fields.push(FieldConfig {
                name: name.to_owned(),
                rules,
            })
        })
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn validate(&self) -> Result<(), FormConfigError> {
        if self.name.is_empty() {
            return Err(FormConfigError::EmptyFormName);
        }

        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(FormConfigError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(FormConfigError::DuplicateField(field.name.clone()));
            }
            if field
                .rules
                .iter()
                .any(|rule| *rule == FieldRule::MinLength { min_length: 0 })
            {
                return Err(FormConfigError::MinLengthZero(field.name.clone()));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<FormValidator, FormConfigError> {
        self.build_with_labels(Labels::empty())
    }

    /// Same as [FormSchema::build], the given labels being added to every metric of the form.
    pub fn build_with_labels(&self, labels: Labels) -> Result<FormValidator, FormConfigError> {
        self.validate()?;
        Ok(FormValidator::new(self.clone(), labels))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
