use tsuyaku_config::Config;
use tsuyaku_translator::Dispatcher;

/// Everything a request handler needs. Built once, shared behind `Arc`.
pub struct AppState {
    pub config: Config,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let dispatcher = Dispatcher::from_config(&config.translator)?;
        tracing::info!(providers = ?dispatcher.provider_names(), "Translation chain ready");

        Ok(Self { config, dispatcher })
    }

    #[cfg(test)]
    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }
}
