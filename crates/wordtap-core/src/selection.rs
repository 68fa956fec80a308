use wordtap_types::{NodeRef, SelectionSnapshot};

/// Read access to the frame's text selection.
pub trait SelectionAccess: Send + Sync {
    /// Text of the current window selection, empty when nothing is selected.
    fn get_text(&self) -> String;

    /// Sentence enclosing the current window selection.
    fn get_sentence(&self) -> String;

    /// Snapshot of `window.getSelection()`, `None` when the frame has none.
    fn selection(&self) -> Option<SelectionSnapshot>;

    fn text_from(&self, selection: &SelectionSnapshot) -> String;

    fn sentence_from(&self, selection: &SelectionSnapshot) -> String;
}

/// Membership test for the extension's own embedded panel. Feeds the
/// `self` flag that keeps panel-originated selections from looping back.
pub trait PanelProbe: Send + Sync {
    fn contains(&self, node: &NodeRef) -> bool;
}
