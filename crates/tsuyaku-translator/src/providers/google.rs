use async_trait::async_trait;
use serde_json::Value;
use tsuyaku_types::AUTO;

use super::{endpoint, status_error};
use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Unofficial Google Translate web endpoint (`client=gtx`). Accepts `auto`.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn request(&self, text: &str, from: &str, to: &str) -> reqwest::RequestBuilder {
        self.client
            .get(endpoint(&self.base_url, "translate_a/single"))
            .query(&[
                ("client", "gtx"),
                ("sl", from),
                ("tl", to),
                ("dt", "t"),
                ("q", text),
            ])
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let response = self.request(text, &from, &to).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, None));
        }

        let json: Value = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let translated = parse_response(&json)?;

        // Index 2 holds the language Google detected
        let from = match json.get(2).and_then(Value::as_str) {
            Some(detected) if from == AUTO => detected.to_string(),
            _ => from,
        };

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "google".to_string(),
            confidence: None,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google".to_string(),
            supports_auto_detect: true,
        }
    }
}

/// `[[["Hello", "你好", ...], [" world", ...]], null, "zh-CN", ...]`: join the
/// first element of every segment in the first array
fn parse_response(json: &Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::InvalidResponse("expected nested segment array".into()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::EmptyTranslation);
    }

    Ok(text)
}
