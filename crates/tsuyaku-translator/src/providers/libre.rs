use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{endpoint, status_error};
use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// LibreTranslate `/translate` endpoint. Needs a concrete source language.
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslator {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn request(&self, text: &str, from: &str, to: &str) -> reqwest::RequestBuilder {
        let body = LibreRequest {
            q: text,
            source: from,
            target: to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        self.client
            .post(endpoint(&self.base_url, "translate"))
            .json(&body)
    }
}

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreResponse {
    translated_text: Option<String>,
    error: Option<String>,
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let response = self.request(text, &from, &to).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<LibreResponse>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(status_error(status, detail));
        }

        let body: LibreResponse = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            text: parse_response(body)?,
            from,
            to,
            provider: "libretranslate".to_string(),
            confidence: None,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            supports_auto_detect: false,
        }
    }
}

fn parse_response(body: LibreResponse) -> Result<String, TranslateError> {
    match (body.translated_text, body.error) {
        (Some(text), _) if !text.is_empty() => Ok(text),
        (Some(_), _) => Err(TranslateError::EmptyTranslation),
        (None, Some(error)) => Err(TranslateError::ApiError(error)),
        (None, None) => Err(TranslateError::InvalidResponse(
            "missing translatedText".into(),
        )),
    }
}
