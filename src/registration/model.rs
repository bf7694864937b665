use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoStaticStr;
use thiserror::Error;

use crate::form::FormValues;
use crate::registration::date::format_card_date;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/gif"];
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
pub const NO_CARD_DATA: &str = "No hay datos";

const IMAGE_KEY: &str = "image";
const IMAGE_BASE64_KEY: &str = "imageBase64";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CardType {
    #[default]
    Persona,
    Mascota,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Image type `{0}` is not allowed")]
    UnsupportedType(String),

    #[error("The image is {size} bytes, the maximum is {max} bytes")]
    TooLarge { size: usize, max: usize },
}

/// A photo sent along with a registration, encoded as a data URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    name: String,
    mime_type: String,
    data_url: String,
}

impl ImageAttachment {
    pub fn from_bytes(name: &str, mime_type: &str, bytes: &[u8]) -> Result<Self, ImageError> {
        if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
            return Err(ImageError::UnsupportedType(mime_type.to_string()));
        }
        if bytes.len() > MAX_IMAGE_SIZE {
            return Err(ImageError::TooLarge {
                size: bytes.len(),
                max: MAX_IMAGE_SIZE,
            });
        }

        Ok(ImageAttachment {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            data_url: format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// Body of `POST /register`
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub vcard_type: CardType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<&'a str>,
    pub data: &'a FormValues,
}

impl<'a> RegisterRequest<'a> {
    pub fn new(
        vcard_type: CardType,
        data: &'a FormValues,
        image: Option<&'a ImageAttachment>,
    ) -> Self {
        RegisterRequest {
            vcard_type,
            image_base64: image.map(ImageAttachment::data_url),
            image_name: image.map(ImageAttachment::name),
            image_type: image.map(ImageAttachment::mime_type),
            data,
        }
    }
}

/// A saved registration, as returned by the registration service.
///
/// The service owns the shape of the record, so every key is kept. The well known ones are
/// `id`, `nanoId`, `qrContent`, `vcardType`, `data`, `image` and `created_at`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct CardRecord(Map<String, Value>);

impl CardRecord {
    /// The card shown when the service gave nothing usable back: the submitted data
    pub fn from_submission(vcard_type: CardType, data: &FormValues) -> Self {
        let mut record = Map::new();
        record.insert(
            "vcardType".to_string(),
            Value::String(vcard_type.as_str().to_string()),
        );
        record.insert(
            "data".to_string(),
            Value::Object(
                data.iter()
                    .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                    .collect(),
            ),
        );
        CardRecord(record)
    }

    /// Only JSON objects are cards
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(CardRecord(map)),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(display_value)
    }

    pub fn nano_id(&self) -> Option<&str> {
        self.0.get("nanoId").and_then(Value::as_str)
    }

    pub fn qr_content(&self) -> Option<&str> {
        self.0.get("qrContent").and_then(Value::as_str)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.0.get("created_at").and_then(Value::as_str)
    }

    /// Unknown or missing card types are shown as a person's card
    pub fn card_type(&self) -> CardType {
        match self.0.get("vcardType").and_then(Value::as_str) {
            Some("mascota") => CardType::Mascota,
            _ => CardType::Persona,
        }
    }

    /// The registered fields: the `data` object when there is one, the whole record otherwise
    pub fn form_data(&self) -> &Map<String, Value> {
        match self.0.get("data") {
            Some(Value::Object(data)) => data,
            _ => &self.0,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.form_data().get(name).filter(|value| !value.is_null())
    }

    pub fn formatted_created_at(&self) -> String {
        format_card_date(self.created_at())
    }

    pub fn image_data_url(&self) -> Option<&str> {
        self.0
            .get(IMAGE_KEY)
            .and_then(|image| image.get(IMAGE_BASE64_KEY))
            .and_then(Value::as_str)
    }

    /// Stores the data URL of the photo under `image.imageBase64`, keeping the other image keys
    pub fn attach_image(&mut self, data_url: &str) {
        let image = self
            .0
            .entry(IMAGE_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !image.is_object() {
            *image = Value::Object(Map::new());
        }
        if let Value::Object(image) = image {
            image.insert(
                IMAGE_BASE64_KEY.to_string(),
                Value::String(data_url.to_string()),
            );
        }
    }

    /// One line summary of what the card holds, `id: 1 | nanoId: abc | data: nombre, tutorRut`.
    /// A card with nothing to show gives [NO_CARD_DATA].
    pub fn available_fields(&self) -> String {
        let mut fields = vec![];
        for key in ["id", "nanoId", "qrContent", "vcardType"] {
            if let Some(value) = self.0.get(key).and_then(display_value) {
                fields.push(format!("{}: {}", key, value));
            }
        }
        for key in ["data", IMAGE_KEY] {
            if let Some(Value::Object(map)) = self.0.get(key) {
                let keys = map.keys().map(String::as_str).collect::<Vec<_>>();
                fields.push(format!("{}: {}", key, keys.join(", ")));
            }
        }
        if let Some(created_at) = self.0.get("created_at").and_then(display_value) {
            fields.push(format!("created_at: {}", created_at));
        }
        if fields.is_empty() {
            return NO_CARD_DATA.to_string();
        }
        fields.join(" | ")
    }
}

/// Strings are shown without quotes, empty and null values are skipped
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
