use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The raw values of a submitted form, keyed by field name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormValues(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_deserialize_from_a_json_object() {
        let values: FormValues =
            serde_json::from_str(r#"{"nombre": "María", "tutorRut": "12.345.678-5"}"#).unwrap();
        assert_eq!(values.get("nombre"), Some("María"));
        assert_eq!(values.get("tutorRut"), Some("12.345.678-5"));
        assert_eq!(values.get("email"), None);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_builder_and_iteration() {
        let mut values = FormValues::new().with("b", "2").with("a", "1");
        assert_eq!(values.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);

        assert_eq!(values.remove("a"), Some("1".to_string()));
        assert_eq!(values, FormValues::from_iter([("b", "2")]));
    }
}
