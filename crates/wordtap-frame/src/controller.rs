use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordtap_core::dispatch::Dispatcher;
use wordtap_core::gate::{GatedConfig, run_config_gate};
use wordtap_core::mux::run_slot;

use crate::host::{Collaborators, HostChannels};
use crate::keys::escape_watcher;
use crate::listeners::request_listener;
use crate::relay::frame_relay;

/// Centralized channel management
pub struct ChannelSet {
    pub gate: (watch::Sender<GatedConfig>, watch::Receiver<GatedConfig>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            gate: watch::channel(None), // idle until the first emission
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame controller for task spawning and lifecycle
pub struct FrameController {
    channels: ChannelSet,
    collaborators: Collaborators,
    cancel_token: CancellationToken,
}

impl FrameController {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            channels: ChannelSet::new(),
            collaborators,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, host: HostChannels) -> JoinSet<anyhow::Result<()>> {
        let HostChannels {
            config,
            requests,
            frames,
            keys,
        } = host;

        let mut tasks = JoinSet::new();

        let dispatcher = Dispatcher::new(
            self.collaborators.transport.clone(),
            self.collaborators.selection.clone(),
            self.collaborators.panel.clone(),
            self.collaborators.normalizer.clone(),
        );

        // Slot receivers are cloned before the gate starts so the first
        // emission cannot be missed.
        let slots = [
            self.collaborators.behaviors.quick_search.clone(),
            self.collaborators.behaviors.select_text.clone(),
            self.collaborators.behaviors.instant_capture.clone(),
        ]
        .map(|behavior| (behavior, self.channels.gate.1.clone()));

        // Configuration gate. It holds the frame's root token: a failed
        // configuration source is fatal and winds the whole frame down.
        let gate_tx = self.channels.gate.0.clone();
        let judge = self.collaborators.blacklist.clone();
        let cancel = self.cancel_token.clone();
        tasks.spawn(async move {
            run_config_gate(config, judge, gate_tx, cancel).await?;
            Ok(())
        });

        // Detection slots: quick search, select text, instant capture
        for (behavior, gate_rx) in slots {
            let dispatcher = dispatcher.clone();
            let cancel = self.cancel_token.child_token();
            tasks.spawn(async move {
                run_slot(behavior, gate_rx, dispatcher, cancel).await?;
                Ok(())
            });
        }

        // External trigger listeners (PRELOAD_SELECTION / EMIT_SELECTION)
        tasks.spawn(request_listener(
            requests,
            dispatcher,
            self.cancel_token.child_token(),
        ));

        // Cross-frame relay
        tasks.spawn(frame_relay(
            frames,
            self.collaborators.transport.clone(),
            self.cancel_token.child_token(),
        ));

        // Escape key watcher
        tasks.spawn(escape_watcher(
            keys,
            self.collaborators.transport.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
