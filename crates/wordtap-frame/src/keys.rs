use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordtap_core::transport::Transport;
use wordtap_types::{KeyStroke, LocalSignal};

/// Emits the local escape signal the embedded panel listens for.
/// Independent of configuration state.
pub async fn escape_watcher(
    keys: AsyncReceiver<KeyStroke>,
    transport: Arc<dyn Transport>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            stroke = keys.recv() => {
                let Ok(stroke) = stroke else {
                    return Ok(());
                };
                if stroke.is_escape()
                    && let Err(e) = transport.send_local(LocalSignal::EscapeKey).await
                {
                    tracing::warn!("escape signal dropped: {e}");
                }
            }
        }
    }
}
