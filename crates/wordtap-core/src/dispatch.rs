use std::sync::Arc;

use wordtap_types::{
    LocalSignal, LookupWord, OutboundMessage, PointerState, TriggerEvent, WordDraft,
};

use crate::normalize::Normalizer;
use crate::selection::{PanelProbe, SelectionAccess};
use crate::transport::Transport;

/// Builds outbound messages from raw trigger events and hands them to
/// the transport.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    selection: Arc<dyn SelectionAccess>,
    panel: Arc<dyn PanelProbe>,
    normalizer: Normalizer,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn Transport>,
        selection: Arc<dyn SelectionAccess>,
        panel: Arc<dyn PanelProbe>,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            transport,
            selection,
            panel,
            normalizer,
        }
    }

    pub async fn handle(&self, event: TriggerEvent) {
        match event {
            TriggerEvent::KeySequence { .. } => {
                self.send_local(LocalSignal::TripleCtrl).await;
            }
            TriggerEvent::DragSelection {
                draft,
                pointer,
                modifiers,
                db_click,
                self_origin,
                force,
                instant,
            } => {
                let word = match draft {
                    Some(draft) => self.normalizer.normalize(draft).await,
                    None => None,
                };
                let message = match word {
                    Some(word) => OutboundMessage::builder()
                        .pointer(pointer)
                        .modifiers(modifiers)
                        .db_click(db_click)
                        .self_origin(self_origin)
                        .force(force)
                        .instant(instant)
                        .word(Some(word))
                        .build(),
                    // One message per gesture: receivers reset stale UI
                    // on the empty signal.
                    None => OutboundMessage::empty(self_origin),
                };
                self.send(message).await;
            }
            TriggerEvent::HoverCapture {
                draft,
                pointer,
                modifiers,
                self_origin,
            } => {
                let Some(word) = self.normalizer.normalize(draft).await else {
                    // Ambient trigger: nothing to report, nothing to reset.
                    return;
                };
                let message = OutboundMessage::builder()
                    .pointer(pointer)
                    .modifiers(modifiers)
                    .instant(true)
                    .self_origin(self_origin)
                    .word(Some(word))
                    .build();
                self.send(message).await;
            }
        }
    }

    /// `EMIT_SELECTION`: read the live selection and report it in full.
    /// An empty selection sends nothing at all.
    pub async fn emit_current_selection(&self) {
        let Some(snapshot) = self.selection.selection() else {
            return;
        };
        if snapshot.range_count == 0 {
            return;
        }
        let text = self.selection.text_from(&snapshot);
        if text.is_empty() {
            return;
        }
        let context = self.selection.sentence_from(&snapshot);
        let Some(word) = self.normalizer.normalize(WordDraft { text, context }).await else {
            return;
        };
        let message = OutboundMessage::builder()
            .pointer(PointerState {
                mouse_x: snapshot.rect.right,
                mouse_y: snapshot.rect.top,
            })
            .instant(true)
            .self_origin(self.panel.contains(&snapshot.anchor))
            .word(Some(word))
            .build();
        self.send(message).await;
    }

    /// `PRELOAD_SELECTION`: current selection as a word, if any.
    pub async fn preload_selection(&self) -> Option<LookupWord> {
        let text = self.selection.get_text();
        if text.is_empty() {
            return None;
        }
        let context = self.selection.get_sentence();
        self.normalizer.normalize(WordDraft { text, context }).await
    }

    async fn send(&self, message: OutboundMessage) {
        if let Err(e) = self.transport.send(message).await {
            tracing::warn!("lookup message dropped: {e}");
        }
    }

    async fn send_local(&self, signal: LocalSignal) {
        if let Err(e) = self.transport.send_local(signal).await {
            tracing::warn!("local signal dropped: {e}");
        }
    }
}
