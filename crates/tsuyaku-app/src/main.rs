use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncReadExt;
use tokio::signal;
use tsuyaku_config::Config;
use tsuyaku_types::{SourceLang, TranslationRequest, TranslationResult, target_or_default};

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new().context("Failed to load config from environment")?,
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    logging::init_tracing(&config.logging);

    // Single-threaded: requests are handled one after another anyway
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let code = runtime.block_on(run(cli.command, config));

    // Stdin reads park a blocking thread that never returns on Ctrl+C
    runtime.shutdown_timeout(Duration::from_millis(500));

    code
}

async fn run(command: Command, config: Config) -> anyhow::Result<ExitCode> {
    match command {
        Command::Detect { text } => {
            println!("{}", tsuyaku_core::detect(&text.join(" ")));
            Ok(ExitCode::SUCCESS)
        }
        Command::Translate { from, to, text } => {
            let text = if text.is_empty() {
                let mut buffer = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buffer)
                    .await
                    .context("Failed to read text from stdin")?;
                buffer
            } else {
                text.join(" ")
            };

            let source = from
                .map(|from| SourceLang::parse(&from))
                .unwrap_or_else(|| config.input.default_source());
            let target = target_or_default(to, &config.input.default_to);

            let state = AppState::new(config)?;
            let request = TranslationRequest::new(text, source, target);

            match events::translate::handle_translate(&state, request).await {
                TranslationResult::Success { translation } => {
                    println!("{translation}");
                    Ok(ExitCode::SUCCESS)
                }
                TranslationResult::Failure { error } => {
                    eprintln!("Translation failed: {error}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Serve => {
            let state = Arc::new(AppState::new(config)?);
            serve(state).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run the stdin/stdout message bridge until input closes or Ctrl+C
async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(tokio::io::stdin(), tokio::io::stdout());

    let mut shutdown_requested = false;

    loop {
        tokio::select! {
            result = signal::ctrl_c(), if !shutdown_requested => {
                result.context("Failed to listen for ctrl+c")?;
                tracing::info!("Shutdown requested");
                shutdown_requested = true;
                controller.shutdown();
            }
            next = tasks.join_next() => {
                match next {
                    None => break,
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("Bridge task failed: {e:#}");
                        controller.shutdown();
                    }
                    Some(Err(e)) => {
                        tracing::error!("Bridge task panicked: {e}");
                        controller.shutdown();
                    }
                }
            }
        }
    }

    tracing::info!("Bridge stopped");
    Ok(())
}
