use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tsuyaku_config::Config;
use tsuyaku_translator::{
    Dispatcher, LanguageCode, ProviderMetadata, TranslateError, Translation, Translator,
};
use tsuyaku_types::TranslationResult;

use crate::controller::AppController;
use crate::events::{event_loop, handle_message};
use crate::io::{read_messages, write_results};
use crate::state::AppState;

/// Echoes the text in upper case and records the languages it was given
#[derive(Default)]
struct EchoTranslator {
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((from.clone(), to.clone()));

        Ok(Translation {
            text: text.to_uppercase(),
            from,
            to,
            provider: "echo".to_string(),
            confidence: None,
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Echo".to_string(),
            supports_auto_detect: false,
        }
    }
}

fn state_with(translator: Arc<EchoTranslator>) -> AppState {
    let providers: Vec<Arc<dyn Translator>> = vec![translator];
    AppState::with_dispatcher(Config::default(), Dispatcher::new(providers))
}

#[tokio::test]
async fn translate_message_is_answered() {
    let echo = Arc::new(EchoTranslator::default());
    let state = state_with(echo.clone());

    let result = handle_message(
        &state,
        r#"{"action":"translate","text":"hello","from":"en","to":"ja"}"#,
    )
    .await;

    assert_eq!(result, TranslationResult::success("HELLO"));
    assert_eq!(
        echo.seen.lock().unwrap().clone(),
        vec![("en".to_string(), "ja".to_string())]
    );
}

#[tokio::test]
async fn omitted_languages_default_to_auto_and_english() {
    let echo = Arc::new(EchoTranslator::default());
    let state = state_with(echo.clone());

    handle_message(&state, r#"{"action":"translate","text":"Привет"}"#).await;

    // The echo provider cannot auto-detect, so it sees the detected code
    assert_eq!(
        echo.seen.lock().unwrap().clone(),
        vec![("ru".to_string(), "en".to_string())]
    );
}

#[tokio::test]
async fn malformed_message_gets_failure() {
    let echo = Arc::new(EchoTranslator::default());
    let state = state_with(echo.clone());

    for line in ["not json", r#"{"action":"speak","text":"hi"}"#, r#"{"text":"hi"}"#] {
        let result = handle_message(&state, line).await;
        match result {
            TranslationResult::Failure { error } => assert!(error.starts_with("Invalid message")),
            other => panic!("expected failure for {line}, got {other:?}"),
        }
    }
    assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_text_never_reaches_providers() {
    let echo = Arc::new(EchoTranslator::default());
    let state = state_with(echo.clone());

    let result = handle_message(&state, r#"{"action":"translate","text":"   "}"#).await;

    assert_eq!(result, TranslationResult::failure("Text is empty"));
    assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn over_long_text_never_reaches_providers() {
    let echo = Arc::new(EchoTranslator::default());
    let state = state_with(echo.clone());

    let message = serde_json::json!({
        "action": "translate",
        "text": "a".repeat(5001),
        "to": "zh",
    })
    .to_string();
    let result = handle_message(&state, &message).await;

    assert_eq!(
        result,
        TranslationResult::failure("Text is too long: 5001 characters (max 5000)")
    );
    assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn text_is_trimmed_before_dispatch() {
    let echo = Arc::new(EchoTranslator::default());
    let state = state_with(echo);

    let result =
        handle_message(&state, r#"{"action":"translate","text":"  hi \n","to":"fr"}"#).await;

    assert_eq!(result, TranslationResult::success("HI"));
}

#[tokio::test]
async fn pipeline_answers_each_line_in_order() {
    let state = Arc::new(state_with(Arc::new(EchoTranslator::default())));
    let input = concat!(
        r#"{"action":"translate","text":"one"}"#,
        "\n\n",
        "garbage\n",
        r#"{"action":"translate","text":"two","to":"de"}"#,
        "\n",
    );

    let (messages_tx, messages_rx) = kanal::bounded_async(16);
    let (results_tx, results_rx) = kanal::bounded_async(16);

    read_messages(input.as_bytes(), messages_tx, CancellationToken::new())
        .await
        .unwrap();
    event_loop(state, messages_rx, results_tx).await.unwrap();

    let mut output = Vec::new();
    write_results(&mut output, results_rx).await.unwrap();

    let lines: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], serde_json::json!({ "success": true, "translation": "ONE" }));
    assert_eq!(lines[1]["success"], false);
    assert_eq!(lines[2], serde_json::json!({ "success": true, "translation": "TWO" }));
}

#[tokio::test]
async fn controller_tasks_finish_on_eof() {
    let state = Arc::new(state_with(Arc::new(EchoTranslator::default())));
    let controller = AppController::new(state);

    let (output_writer, mut output_reader) = tokio::io::duplex(4096);
    let input = &b"{\"action\":\"translate\",\"text\":\"hey\"}\n"[..];

    let mut tasks = controller.spawn_tasks(input, output_writer);

    let finished = timeout(Duration::from_secs(2), async {
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap().unwrap();
        }
    })
    .await;
    assert!(finished.is_ok(), "bridge tasks did not stop after EOF");

    let mut output = String::new();
    output_reader.read_to_string(&mut output).await.unwrap();
    assert_eq!(output, "{\"success\":true,\"translation\":\"HEY\"}\n");
}

#[tokio::test]
async fn shutdown_stops_the_reader() {
    let state = Arc::new(state_with(Arc::new(EchoTranslator::default())));
    let controller = AppController::new(state);

    // Reader side that never produces data or EOF
    let (_keep_open, idle_input) = tokio::io::duplex(64);
    let mut tasks = controller.spawn_tasks(idle_input, tokio::io::sink());

    controller.shutdown();

    let finished = timeout(Duration::from_secs(2), async {
        while let Some(joined) = tasks.join_next().await {
            joined.unwrap().unwrap();
        }
    })
    .await;
    assert!(finished.is_ok(), "bridge tasks did not stop after shutdown");
}
