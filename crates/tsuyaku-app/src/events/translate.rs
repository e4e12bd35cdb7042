use tsuyaku_core::validate_text;
use tsuyaku_types::{TranslationRequest, TranslationResult};

use crate::state::AppState;

/// Validate the text, then hand it to the dispatcher
pub async fn handle_translate(state: &AppState, request: TranslationRequest) -> TranslationResult {
    let text = match validate_text(&request.text, state.config.input.max_chars) {
        Ok(text) => text.to_string(),
        Err(e) => {
            tracing::debug!("Rejected input: {e}");
            return TranslationResult::failure(e.to_string());
        }
    };

    let request = TranslationRequest { text, ..request };
    let result = state.dispatcher.dispatch(&request).await;

    if let TranslationResult::Failure { error } = &result {
        tracing::warn!(target_lang = %request.target, "Translation failed: {error}");
    }

    result
}
