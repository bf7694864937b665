use metrics::{IntoLabels, Label, SharedString};

/// Labels attached to every counter of a form validator or a registration client.
///
/// Callers pass their own labels (service name, environment, ...) when building those objects,
/// each metrics holder then adds its form, field or card type on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new<K, V>(labels: &[(K, V)]) -> Self
    where
        K: Into<SharedString> + Clone,
        V: Into<SharedString> + Clone,
    {
        Labels::empty().extended(labels)
    }

    pub fn empty() -> Self {
        Labels(vec![])
    }

    /// A copy of these labels with `additional_labels` appended
    pub fn extended<K, V>(&self, additional_labels: &[(K, V)]) -> Labels
    where
        K: Into<SharedString> + Clone,
        V: Into<SharedString> + Clone,
    {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
