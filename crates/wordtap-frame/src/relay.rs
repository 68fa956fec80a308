use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordtap_core::transport::Transport;
use wordtap_types::FrameMessage;

/// Verbatim pass-through of nested-frame traffic into the local
/// transport. Origin trust is the transport's concern.
pub async fn frame_relay(
    frames: AsyncReceiver<FrameMessage>,
    transport: Arc<dyn Transport>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            message = frames.recv() => {
                let Ok(message) = message else {
                    return Ok(());
                };
                if let Err(e) = transport.forward(message).await {
                    tracing::warn!("frame message dropped: {e}");
                }
            }
        }
    }
}
