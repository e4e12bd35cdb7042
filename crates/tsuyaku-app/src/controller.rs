use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{read_messages, write_results};
use crate::state::AppState;

/// Channel capacity between the reader, the event loop and the writer
const CHANNEL_CAPACITY: usize = 64;

/// Task spawning and lifecycle for the message bridge
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn reader, event loop and writer.
    ///
    /// The channels are moved into the tasks rather than kept here, so EOF on
    /// `reader` closes the chain and every task finishes on its own.
    pub fn spawn_tasks<R, W>(&self, reader: R, writer: W) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (messages_tx, messages_rx) = kanal::bounded_async(CHANNEL_CAPACITY);
        let (results_tx, results_rx) = kanal::bounded_async(CHANNEL_CAPACITY);

        let mut tasks = JoinSet::new();

        tasks.spawn(read_messages(
            reader,
            messages_tx,
            self.cancel_token.child_token(),
        ));
        tasks.spawn(event_loop(self.state.clone(), messages_rx, results_tx));
        tasks.spawn(write_results(writer, results_rx));

        tasks
    }

    /// Stop reading new messages; pending ones are still answered
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
