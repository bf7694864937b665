use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub form_validator_creations: Counter,
    pub registration_client_creations: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            form_validator_creations: counter!("form.validator.creations"),
            registration_client_creations: counter!("registration.client.creations"),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
