use metrics::{counter, Counter};

use crate::observability::labels::Labels;
use crate::registration::model::CardType;

const CARD_TYPE: &str = "card_type";

pub struct RegistrationMetrics {
    pub persona: CardMetrics,
    pub mascota: CardMetrics,
    pub lookups: Counter,
    pub lookup_failures: Counter,
}

pub struct CardMetrics {
    pub requests: Counter,
    pub failures: Counter,
}

impl RegistrationMetrics {
    pub fn new(labels: &Labels) -> Self {
        RegistrationMetrics {
            persona: CardMetrics::new(labels, CardType::Persona),
            mascota: CardMetrics::new(labels, CardType::Mascota),
            lookups: counter!("registration.lookups", labels.clone()),
            lookup_failures: counter!("registration.lookup_failures", labels.clone()),
        }
    }

    pub fn for_card(&self, card_type: CardType) -> &CardMetrics {
        match card_type {
            CardType::Persona => &self.persona,
            CardType::Mascota => &self.mascota,
        }
    }
}

impl CardMetrics {
    fn new(labels: &Labels, card_type: CardType) -> Self {
        let labels = labels.extended(&[(CARD_TYPE, card_type.as_str())]);
        CardMetrics {
            requests: counter!("registration.requests", labels.clone()),
            failures: counter!("registration.failures", labels),
        }
    }
}
