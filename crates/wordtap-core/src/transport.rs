use async_trait::async_trait;
use wordtap_types::{FrameMessage, LocalSignal, OutboundMessage};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("receiving end is gone")]
    Disconnected,

    #[error("message encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Messaging seam towards the background/UI process. Every call site is
/// fire-and-forget; failures are logged, never retried.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send to the background process.
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError>;

    /// Same-frame send used for key-state signals.
    async fn send_local(&self, signal: LocalSignal) -> Result<(), TransportError>;

    /// Verbatim pass-through of a nested frame's message.
    async fn forward(&self, message: FrameMessage) -> Result<(), TransportError>;
}
