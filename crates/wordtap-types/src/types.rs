use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Selection text plus its enclosing sentence, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDraft {
    pub text: String,
    pub context: String,
}

/// Normalized lookup record. `text` and `context` are carried over from
/// the draft verbatim; `normalized` is the derived lookup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupWord {
    pub text: String,
    pub context: String,
    pub normalized: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub mouse_x: f64,
    pub mouse_y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierKeys {
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

/// Raw trigger emitted by a detection behavior. Lives only until the
/// dispatcher has turned it into an outbound message.
#[derive(Debug, Clone)]
pub enum TriggerEvent {
    /// The configured key sequence completed.
    KeySequence { at: Instant },
    /// A word was captured under the pointer.
    HoverCapture {
        draft: WordDraft,
        pointer: PointerState,
        modifiers: ModifierKeys,
        self_origin: bool,
    },
    /// A drag selection finished, possibly with no usable text.
    DragSelection {
        draft: Option<WordDraft>,
        pointer: PointerState,
        modifiers: ModifierKeys,
        db_click: bool,
        self_origin: bool,
        force: bool,
        instant: bool,
    },
}

/// Wire message towards the background/UI process. Every field is
/// explicit; `word` serializes as `null` rather than being skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub mouse_x: f64,
    pub mouse_y: f64,
    pub instant: bool,
    #[serde(rename = "self")]
    pub self_origin: bool,
    pub db_click: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub force: bool,
    pub word: Option<LookupWord>,
}

impl OutboundMessage {
    /// Builder seeded with inert defaults: zero coordinates, every flag
    /// false, no word.
    pub fn builder() -> OutboundMessageBuilder {
        OutboundMessageBuilder {
            message: OutboundMessage {
                mouse_x: 0.0,
                mouse_y: 0.0,
                instant: false,
                self_origin: false,
                db_click: false,
                alt_key: false,
                shift_key: false,
                ctrl_key: false,
                meta_key: false,
                force: false,
                word: None,
            },
        }
    }

    /// The empty-selection signal: a trigger fired but no text resolved.
    /// Receivers use it to clear stale UI state.
    pub fn empty(self_origin: bool) -> Self {
        Self::builder().self_origin(self_origin).build()
    }
}

pub struct OutboundMessageBuilder {
    message: OutboundMessage,
}

impl OutboundMessageBuilder {
    pub fn pointer(mut self, pointer: PointerState) -> Self {
        self.message.mouse_x = pointer.mouse_x;
        self.message.mouse_y = pointer.mouse_y;
        self
    }

    pub fn modifiers(mut self, modifiers: ModifierKeys) -> Self {
        self.message.alt_key = modifiers.alt;
        self.message.shift_key = modifiers.shift;
        self.message.ctrl_key = modifiers.ctrl;
        self.message.meta_key = modifiers.meta;
        self
    }

    pub fn instant(mut self, instant: bool) -> Self {
        self.message.instant = instant;
        self
    }

    pub fn self_origin(mut self, self_origin: bool) -> Self {
        self.message.self_origin = self_origin;
        self
    }

    pub fn db_click(mut self, db_click: bool) -> Self {
        self.message.db_click = db_click;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.message.force = force;
        self
    }

    pub fn word(mut self, word: Option<LookupWord>) -> Self {
        self.message.word = word;
        self
    }

    pub fn build(self) -> OutboundMessage {
        self.message
    }
}

/// Same-frame signal consumed by the embedded panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LocalSignal {
    #[serde(rename = "ESCAPE_KEY")]
    EscapeKey,
    #[serde(rename = "TRIPLE_CTRL")]
    TripleCtrl,
}

/// Request arriving from the extension's other pages. Answered regardless
/// of configuration state.
#[derive(Debug)]
pub enum InboundRequest {
    /// `PRELOAD_SELECTION`: current selection as a word, if any.
    PreloadSelection {
        reply: oneshot::Sender<Option<LookupWord>>,
    },
    /// `EMIT_SELECTION`: report the current selection in full.
    EmitSelection,
}

/// Opaque cross-frame payload, forwarded without inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameMessage(pub serde_json::Value);

/// Keydown observed in this frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStroke {
    pub key: String,
    pub modifiers: ModifierKeys,
}

impl KeyStroke {
    pub fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// Handle to a DOM node, minted by the host glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef(pub u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Captured view of `window.getSelection()`. Text is pulled through the
/// extractor, not stored here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSnapshot {
    pub anchor: NodeRef,
    pub rect: BoundingRect,
    pub range_count: usize,
}
