use crate::models;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Ad {
    #[validate(min_length = 2)]
    #[validate(max_length = 200)]
    pub title: String,
    #[validate(min_length = 1)]
    pub text: String,
    #[validate(minimum = 0.0)]
    #[validate(maximum = 99999.99)]
    pub price: Option<f64>,
    /// base64 encoded image
    pub picture: Option<String>,
    #[validate(max_length = 256)]
    pub content_type: Option<String>,
}

impl Ad {
    /// Decodes the uploaded picture. `Ok(None)` when the form carries none.
    pub fn decode_picture(&self, max_bytes: usize) -> Result<Option<models::Picture>, String> {
        let encoded = match self.picture.as_deref().map(str::trim) {
            Some(encoded) if !encoded.is_empty() => encoded,
            _ => return Ok(None),
        };

        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|err| format!("picture is not valid base64: {}", err))?;

        if data.len() > max_bytes {
            return Err(format!(
                "picture must be at most {} bytes, got {}",
                max_bytes,
                data.len()
            ));
        }

        let content_type = self
            .content_type
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Ok(Some(models::Picture { content_type, data }))
    }
}

impl From<&Ad> for models::Ad {
    fn from(form: &Ad) -> Self {
        models::Ad {
            title: form.title.trim().to_string(),
            text: form.text.clone(),
            price: form.price,
            ..Default::default()
        }
    }
}
