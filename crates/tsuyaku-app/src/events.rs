use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tsuyaku_types::{Message, TranslationResult};

use crate::state::AppState;

pub mod translate;

use translate::handle_translate;

/// Answer messages in arrival order until the inbound channel closes
pub async fn event_loop(
    state: Arc<AppState>,
    messages_rx: AsyncReceiver<String>,
    results_tx: AsyncSender<TranslationResult>,
) -> anyhow::Result<()> {
    tracing::info!("Waiting for messages");

    while let Ok(line) = messages_rx.recv().await {
        let result = handle_message(&state, &line).await;
        results_tx.send(result).await?;
    }

    tracing::info!("Message channel closed, event loop exiting");
    Ok(())
}

/// Decode one raw message and produce exactly one result for it
pub async fn handle_message(state: &AppState, line: &str) -> TranslationResult {
    let message: Message = match serde_json::from_str(line) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Rejected malformed message: {e}");
            return TranslationResult::failure(format!("Invalid message: {e}"));
        }
    };

    let input = &state.config.input;
    let request = message.into_request(&input.default_source(), &input.default_to);

    handle_translate(state, request).await
}
