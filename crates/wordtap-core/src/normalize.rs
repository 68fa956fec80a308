use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;
use wordtap_types::{LookupWord, WordDraft};

/// Folds raw selection text into the lookup form carried next to the
/// verbatim original.
pub trait Preprocessor: Send + Sync {
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Turns a word draft into the final lookup record, off the multiplexer's
/// intake path.
#[derive(Clone)]
pub struct Normalizer {
    preprocessor: Arc<dyn Preprocessor>,
}

impl Normalizer {
    pub fn new(preprocessor: Arc<dyn Preprocessor>) -> Self {
        Self { preprocessor }
    }

    /// `None` when the draft has no usable text. `text` and `context`
    /// are carried over verbatim.
    pub async fn normalize(&self, draft: WordDraft) -> Option<LookupWord> {
        if draft.text.trim().is_empty() {
            return None;
        }
        let normalized = self.preprocessor.process(&draft.text);
        Some(LookupWord {
            text: draft.text,
            context: draft.context,
            normalized,
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Arc::new(DefaultPreprocessor))
    }
}
