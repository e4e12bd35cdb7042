use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tsuyaku_config::translator::{ProviderKind, TranslatorConfig};

use crate::{TranslateError, Translator};

mod google;
mod libre;
mod mymemory;

pub use google::GoogleTranslator;
pub use libre::LibreTranslator;
pub use mymemory::{MyMemoryTranslator, region_code};

/// HTTP client shared by every provider in the chain
pub fn build_client(config: &TranslatorConfig) -> Result<reqwest::Client, TranslateError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Instantiate the configured providers in priority order
pub fn build_chain(config: &TranslatorConfig, client: &reqwest::Client) -> Vec<Arc<dyn Translator>> {
    config
        .providers
        .iter()
        .map(|kind| -> Arc<dyn Translator> {
            match kind {
                ProviderKind::Google => Arc::new(GoogleTranslator::new(
                    client.clone(),
                    config.google_url.clone(),
                )),
                ProviderKind::LibreTranslate => Arc::new(LibreTranslator::new(
                    client.clone(),
                    config.libretranslate_url.clone(),
                    config.libretranslate_api_key.clone(),
                )),
                ProviderKind::MyMemory => Arc::new(MyMemoryTranslator::new(
                    client.clone(),
                    config.mymemory_url.clone(),
                )),
            }
        })
        .collect()
}

/// Map a non-success HTTP status to an error, keeping any detail the
/// provider put in the body
fn status_error(status: StatusCode, detail: Option<String>) -> TranslateError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => TranslateError::RateLimitExceeded,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranslateError::AuthenticationError,
        _ => match detail.filter(|d| !d.trim().is_empty()) {
            Some(detail) => TranslateError::ApiError(format!("HTTP {status}: {detail}")),
            None => TranslateError::ApiError(format!("HTTP {status}")),
        },
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
