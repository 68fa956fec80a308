use tokio::task::JoinSet;

pub mod controller;
pub mod host;
pub mod keys;
pub mod listeners;
pub mod relay;

#[cfg(test)]
mod tests;

pub use controller::FrameController;
pub use host::{BehaviorSet, Collaborators, HostChannels};

/// Wire the orchestrator into one document frame.
///
/// Consumes the host's channel ends, so a frame is attached exactly once;
/// a re-evaluated entry script has nothing left to hand over.
pub fn bootstrap(channels: HostChannels, collaborators: Collaborators) -> FrameHandle {
    let controller = FrameController::new(collaborators);
    let tasks = controller.spawn_tasks(channels);
    FrameHandle { controller, tasks }
}

/// Running frame instance. Teardown is host-managed: the frame lives
/// until `shutdown` (page unload) or a fatal configuration-source error.
pub struct FrameHandle {
    controller: FrameController,
    tasks: JoinSet<anyhow::Result<()>>,
}

impl FrameHandle {
    /// Request teardown of every task in this frame.
    pub fn shutdown(&self) {
        self.controller.shutdown();
    }

    /// Wait until all tasks have wound down.
    pub async fn join(mut self) {
        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("frame task exited: {e}"),
                Err(e) => tracing::error!("frame task panicked: {e}"),
            }
        }
    }
}

/// Install the fmt subscriber; call once from the host process.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wordtap_frame=debug".into()),
        )
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
