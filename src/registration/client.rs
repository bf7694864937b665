use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::form::{FormValidator, FormValues};
use crate::observability::labels::Labels;
use crate::registration::config::RegistrationConfig;
use crate::registration::error::RegistrationError;
use crate::registration::metrics::RegistrationMetrics;
use crate::registration::model::{CardRecord, CardType, ImageAttachment, RegisterRequest};
use crate::stats::GLOBAL_STATS;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Blocking client of the registration service (`POST /register`, `GET /{nanoId}`).
///
/// Requests are sent once, failures are reported to the caller as they are.
pub struct RegistrationClient {
    config: RegistrationConfig,
    client: Client,
    metrics: RegistrationMetrics,
}

impl RegistrationClient {
    pub fn new(config: RegistrationConfig) -> Result<Self, RegistrationError> {
        Self::new_with_labels(config, Labels::empty())
    }

    pub fn new_with_labels(
        config: RegistrationConfig,
        labels: Labels,
    ) -> Result<Self, RegistrationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| RegistrationError::Client(err.to_string()))?;
        GLOBAL_STATS.registration_client_creations.increment(1);

        Ok(RegistrationClient {
            config,
            client,
            metrics: RegistrationMetrics::new(&labels),
        })
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Validates the values with `form`, then saves them (and the photo, if any) as a new card.
    ///
    /// When the service accepts the registration without returning a card, the card is built
    /// from the submitted values. The photo is always attached to the returned card.
    pub fn register(
        &self,
        form: &FormValidator,
        card_type: CardType,
        values: &FormValues,
        image: Option<&ImageAttachment>,
    ) -> Result<CardRecord, RegistrationError> {
        let metrics = self.metrics.for_card(card_type);
        metrics.requests.increment(1);

        let result = self.send_registration(form, card_type, values, image);
        if result.is_err() {
            metrics.failures.increment(1);
        }
        result
    }

    /// Fetches a saved card by its nano id
    pub fn fetch_card(&self, nano_id: &str) -> Result<CardRecord, RegistrationError> {
        self.metrics.lookups.increment(1);

        let result = self.send_lookup(nano_id);
        if result.is_err() {
            self.metrics.lookup_failures.increment(1);
        }
        result
    }

    fn send_registration(
        &self,
        form: &FormValidator,
        card_type: CardType,
        values: &FormValues,
        image: Option<&ImageAttachment>,
    ) -> Result<CardRecord, RegistrationError> {
        form.validate(values)?;

        let request = RegisterRequest::new(card_type, values, image);
        let body = serde_json::to_vec(&request)
            .map_err(|err| RegistrationError::Encode(err.to_string()))?;

        let response = self
            .client
            .post(self.config.url("register"))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .map_err(|err| RegistrationError::Connection(err.to_string()))?;

        if !self.config.is_accepted(response.status().as_u16()) {
            return Err(status_error(response));
        }

        // An empty or unreadable body still means the card was saved
        let mut card = response
            .text()
            .ok()
            .and_then(|text| serde_json::from_str::<Value>(&text).ok())
            .and_then(CardRecord::from_value)
            .unwrap_or_else(|| CardRecord::from_submission(card_type, values));

        if let Some(image) = image {
            card.attach_image(image.data_url());
        }
        Ok(card)
    }

    fn send_lookup(&self, nano_id: &str) -> Result<CardRecord, RegistrationError> {
        if !is_nano_id(nano_id) {
            return Err(RegistrationError::InvalidNanoId(nano_id.to_string()));
        }

        let response = self
            .client
            .get(self.config.url(nano_id))
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .send()
            .map_err(|err| RegistrationError::Connection(err.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RegistrationError::NotFound(nano_id.to_string()));
        }
        if !self.config.is_accepted(response.status().as_u16()) {
            return Err(status_error(response));
        }

        let text = response
            .text()
            .map_err(|err| RegistrationError::Decode(err.to_string()))?;
        let value: Value =
            serde_json::from_str(&text).map_err(|err| RegistrationError::Decode(err.to_string()))?;
        CardRecord::from_value(value)
            .ok_or_else(|| RegistrationError::Decode("the card is not a JSON object".to_string()))
    }
}

/// Nano ids only use the URL-safe alphabet `[A-Za-z0-9_-]`
fn is_nano_id(nano_id: &str) -> bool {
    !nano_id.is_empty()
        && nano_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn status_error(response: Response) -> RegistrationError {
    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        return RegistrationError::Forbidden;
    }

    let reason = status.canonical_reason().unwrap_or("Unknown status");
    let message = match response.text() {
        Ok(body) if !body.trim().is_empty() => body,
        _ => reason.to_string(),
    };
    RegistrationError::Status {
        status: status.as_u16(),
        message,
    }
}
