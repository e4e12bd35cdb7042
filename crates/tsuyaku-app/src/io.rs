use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tsuyaku_types::TranslationResult;

/// Forward non-blank lines from `reader` until EOF or cancellation.
/// Dropping `messages_tx` on return is what ends the event loop.
pub async fn read_messages<R>(
    reader: R,
    messages_tx: AsyncSender<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::info!("Message reader stopping");
                break;
            }
        };

        let Some(line) = line else {
            tracing::info!("Input closed");
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Message received: {} bytes", line.len());
        messages_tx.send(line).await?;
    }

    Ok(())
}

/// Write each result as one JSON line
pub async fn write_results<W>(
    mut writer: W,
    results_rx: AsyncReceiver<TranslationResult>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Ok(result) = results_rx.recv().await {
        let mut line = serde_json::to_vec(&result)?;
        line.push(b'\n');

        writer.write_all(&line).await?;
        writer.flush().await?;
    }

    Ok(())
}
