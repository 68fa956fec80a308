use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordtap_core::dispatch::Dispatcher;
use wordtap_types::InboundRequest;

/// Always-on request surface; answers regardless of configuration state.
/// Runs on every frame.
pub async fn request_listener(
    requests: AsyncReceiver<InboundRequest>,
    dispatcher: Dispatcher,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            request = requests.recv() => {
                let Ok(request) = request else {
                    // Host glue dropped its sender; nothing left to answer.
                    return Ok(());
                };
                match request {
                    InboundRequest::PreloadSelection { reply } => {
                        let dispatcher = dispatcher.clone();
                        tokio::spawn(async move {
                            let word = dispatcher.preload_selection().await;
                            if reply.send(word).is_err() {
                                tracing::debug!("preload requester went away");
                            }
                        });
                    }
                    InboundRequest::EmitSelection => {
                        let dispatcher = dispatcher.clone();
                        tokio::spawn(async move {
                            dispatcher.emit_current_selection().await;
                        });
                    }
                }
            }
        }
    }
}
