use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tsuyaku_types::AUTO;

use super::{endpoint, status_error};
use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// MyMemory wants region-qualified codes
const REGION_CODES: &[(&str, &str)] = &[
    ("zh", "zh-CN"),
    ("en", "en-US"),
    ("ja", "ja-JP"),
    ("ko", "ko-KR"),
    ("fr", "fr-FR"),
    ("de", "de-DE"),
    ("es", "es-ES"),
    ("ru", "ru-RU"),
];

/// Region-qualified form of `code`; unknown codes pass through unchanged
pub fn region_code(code: &str) -> String {
    REGION_CODES
        .iter()
        .find(|(short, _)| *short == code)
        .map(|(_, region)| region.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// MyMemory `/get` endpoint. Needs a concrete source language.
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl MyMemoryTranslator {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn request(&self, text: &str, from: &str, to: &str) -> reqwest::RequestBuilder {
        let langpair = format!("{}|{}", region_code(from), region_code(to));

        self.client
            .get(endpoint(&self.base_url, "get"))
            .query(&[("q", text), ("langpair", langpair.as_str())])
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: Option<ResponseData>,
    #[serde(default)]
    response_status: Value,
    response_details: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
    #[serde(rename = "match")]
    match_score: Option<f64>,
}

impl MyMemoryResponse {
    /// `responseStatus` comes back as a number or a numeric string
    fn status(&self) -> Option<u64> {
        match &self.response_status {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let from = if from == AUTO {
            tsuyaku_core::detect(text)
        } else {
            from
        };

        let response = self.request(text, &from, &to).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, None));
        }

        let body: MyMemoryResponse = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let (text, confidence) = parse_response(body)?;

        Ok(Translation {
            text,
            from,
            to,
            provider: "mymemory".to_string(),
            confidence,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            supports_auto_detect: false,
        }
    }
}

fn parse_response(body: MyMemoryResponse) -> Result<(String, Option<f32>), TranslateError> {
    let status = body.status();

    match body.response_data {
        Some(ResponseData {
            translated_text: Some(text),
            match_score,
        }) if status == Some(200) => {
            if text.is_empty() {
                return Err(TranslateError::EmptyTranslation);
            }
            Ok((text, match_score.map(|score| score as f32)))
        }
        _ => Err(TranslateError::ApiError(
            body.response_details
                .filter(|details| !details.trim().is_empty())
                .unwrap_or_else(|| "MyMemory translation failed".to_string()),
        )),
    }
}
