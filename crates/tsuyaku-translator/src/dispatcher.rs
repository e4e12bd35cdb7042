use std::sync::Arc;

use tracing::Instrument;
use tsuyaku_config::translator::TranslatorConfig;
use tsuyaku_core::detect;
use tsuyaku_types::{SourceLang, TranslationRequest, TranslationResult};
use uuid::Uuid;

use crate::providers::{build_chain, build_client};
use crate::{TranslateError, Translation, Translator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Every provider failed; carries the last provider's error message
    #[error("{last_error}")]
    AllProvidersFailed { last_error: String },

    #[error("all translation services failed")]
    NoProviders,
}

/// Tries an ordered chain of providers until one returns a translation
#[derive(Clone)]
pub struct Dispatcher {
    providers: Vec<Arc<dyn Translator>>,
}

impl Dispatcher {
    pub fn new(providers: Vec<Arc<dyn Translator>>) -> Self {
        Self { providers }
    }

    /// Build the configured chain over one shared HTTP client
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = build_client(config)?;
        Ok(Self::new(build_chain(config, &client)))
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.metadata().name).collect()
    }

    /// Translate `request`, folding the outcome into the wire result
    pub async fn dispatch(&self, request: &TranslationRequest) -> TranslationResult {
        match self.try_dispatch(request).await {
            Ok(translation) => TranslationResult::success(translation.text),
            Err(e) => TranslationResult::failure(e.to_string()),
        }
    }

    /// Walk the chain in order and return the first non-empty translation.
    ///
    /// Providers that accept `auto` get the request's source as is; the rest
    /// get the locally detected language. Failures are logged and the next
    /// provider is tried. Providers are never called concurrently.
    pub async fn try_dispatch(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, DispatchError> {
        let span = tracing::info_span!("dispatch", request_id = %Uuid::new_v4());

        async move {
            let detected = match &request.source {
                SourceLang::Auto => detect(&request.text),
                SourceLang::Code(code) => code.clone(),
            };

            tracing::debug!(
                source = %request.source,
                detected = %detected,
                target = %request.target,
                chars = request.text.chars().count(),
                "Dispatching translation"
            );

            let mut last_error = None;

            for provider in &self.providers {
                let metadata = provider.metadata();
                let from = if metadata.supports_auto_detect {
                    request.source.as_str().to_string()
                } else {
                    detected.clone()
                };

                tracing::debug!(provider = %metadata.name, from = %from, "Trying provider");

                let error = match provider
                    .translate(&request.text, from, request.target.clone())
                    .await
                {
                    Ok(translation) if !translation.text.is_empty() => {
                        tracing::info!(
                            provider = %metadata.name,
                            from = %translation.from,
                            confidence = ?translation.confidence,
                            "Translation succeeded"
                        );
                        return Ok(translation);
                    }
                    Ok(_) => TranslateError::EmptyTranslation,
                    Err(e) => e,
                };

                tracing::warn!(provider = %metadata.name, error = %error, "Translator failed");
                last_error = Some(error.to_string());
            }

            tracing::warn!("All translation providers failed");

            Err(match last_error {
                Some(last_error) => DispatchError::AllProvidersFailed { last_error },
                None => DispatchError::NoProviders,
            })
        }
        .instrument(span)
        .await
    }
}
