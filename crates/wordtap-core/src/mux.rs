use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wordtap_types::TriggerEvent;

use crate::behavior::{Behavior, BehaviorGuard};
use crate::dispatch::Dispatcher;
use crate::error::OrchestratorError;
use crate::gate::GatedConfig;

/// Raw events buffered per behavior generation.
const EVENT_BUFFER: usize = 32;

struct ActiveSlot {
    guard: BehaviorGuard,
    events: AsyncReceiver<TriggerEvent>,
}

/// Per-slot switch-to-latest loop.
///
/// Every gate emission disposes the current subscription before the new
/// one is attached, so two generations of the same behavior never overlap.
/// Each raw event is handled on its own task; slow normalization never
/// blocks intake.
pub async fn run_slot(
    behavior: Arc<dyn Behavior>,
    mut gate: watch::Receiver<GatedConfig>,
    dispatcher: Dispatcher,
    cancel: CancellationToken,
) -> Result<(), OrchestratorError> {
    let mut active: Option<ActiveSlot> = None;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                if let Some(slot) = active.take() {
                    slot.guard.dispose().await;
                }
                return Ok(());
            }
            changed = gate.changed() => {
                // Dispose first so a closed gate still tears the old
                // generation down.
                if let Some(slot) = active.take() {
                    slot.guard.dispose().await;
                }
                if changed.is_err() {
                    return Err(OrchestratorError::GateClosed);
                }
                if let Some(config) = gate.borrow_and_update().clone() {
                    let (events_tx, events_rx) = kanal::bounded_async(EVENT_BUFFER);
                    tracing::debug!(behavior = behavior.name(), "attaching behavior");
                    let guard = behavior.attach(config, events_tx);
                    active = Some(ActiveSlot { guard, events: events_rx });
                } else {
                    tracing::debug!(behavior = behavior.name(), "slot idle");
                }
            }
            event = next_event(&active) => {
                match event {
                    Some(event) => {
                        let dispatcher = dispatcher.clone();
                        tokio::spawn(async move { dispatcher.handle(event).await });
                    }
                    None => {
                        // The behavior dropped its sender; park the slot
                        // until the next configuration emission.
                        if let Some(slot) = active.take() {
                            slot.guard.dispose().await;
                        }
                    }
                }
            }
        }
    }
}

async fn next_event(active: &Option<ActiveSlot>) -> Option<TriggerEvent> {
    match active {
        Some(slot) => slot.events.recv().await.ok(),
        None => std::future::pending().await,
    }
}
