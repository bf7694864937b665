mod client;
mod config;
mod date;
mod error;
mod metrics;
mod model;

pub use client::RegistrationClient;
pub use config::{RegistrationConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SEC};
pub use date::{format_card_date, UNKNOWN_DATE};
pub use error::RegistrationError;
pub use model::{
    CardRecord, CardType, ImageAttachment, ImageError, RegisterRequest, ALLOWED_IMAGE_TYPES,
    MAX_IMAGE_SIZE, NO_CARD_DATA,
};
