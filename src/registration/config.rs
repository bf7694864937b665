use serde::{Deserialize, Serialize};
use std::{ops::Range, time::Duration};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SEC: u64 = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Base URL of the registration service, `/register` and `/{nanoId}` are resolved against it
    pub endpoint: String,
    pub timeout: Duration,
    pub accepted_status_codes: Vec<Range<u16>>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        RegistrationConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
            accepted_status_codes: vec![200..300],
        }
    }
}

impl RegistrationConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_accepted_status_codes(mut self, accepted_status_codes: Vec<Range<u16>>) -> Self {
        self.accepted_status_codes = accepted_status_codes;
        self
    }

    pub fn is_accepted(&self, status: u16) -> bool {
        self.accepted_status_codes
            .iter()
            .any(|range| range.contains(&status))
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }
}
