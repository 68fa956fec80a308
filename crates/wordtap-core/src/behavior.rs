use std::sync::Arc;

use kanal::AsyncSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wordtap_config::Config;
use wordtap_types::TriggerEvent;

/// One selection-detection strategy (key-sequence, hover or drag).
///
/// `attach` spawns whatever listeners the strategy needs for the given
/// configuration and pushes raw triggers into `events`. All resources
/// must be released once the returned guard is disposed.
pub trait Behavior: Send + Sync {
    fn name(&self) -> &'static str;

    fn attach(&self, config: Arc<Config>, events: AsyncSender<TriggerEvent>) -> BehaviorGuard;
}

/// Handle to one live behavior subscription.
pub struct BehaviorGuard {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl BehaviorGuard {
    pub fn new(cancel: CancellationToken, task: JoinHandle<()>) -> Self {
        Self { cancel, task }
    }

    /// Cancel the subscription and wait until its listeners are gone.
    ///
    /// Returns only after the behavior task has finished, so the next
    /// generation can never overlap the one being torn down.
    pub async fn dispose(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await
            && !e.is_cancelled()
        {
            tracing::warn!("behavior task ended abnormally: {e}");
        }
    }
}
