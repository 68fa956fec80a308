use std::sync::Arc;

use kanal::AsyncReceiver;
use wordtap_config::Config;
use wordtap_core::behavior::Behavior;
use wordtap_core::gate::BlacklistJudge;
use wordtap_core::normalize::Normalizer;
use wordtap_core::selection::{PanelProbe, SelectionAccess};
use wordtap_core::transport::Transport;
use wordtap_types::{FrameMessage, InboundRequest, KeyStroke};

/// Streams the host glue feeds into this frame. Consumed by `bootstrap`,
/// which is what makes initialization once-per-frame.
pub struct HostChannels {
    /// Hot-reloadable configuration snapshots.
    pub config: AsyncReceiver<Config>,
    /// Requests from the extension's other pages.
    pub requests: AsyncReceiver<InboundRequest>,
    /// Cross-frame postMessage traffic.
    pub frames: AsyncReceiver<FrameMessage>,
    /// Keydowns observed in this frame.
    pub keys: AsyncReceiver<KeyStroke>,
}

/// Everything the orchestrator calls out to.
pub struct Collaborators {
    pub transport: Arc<dyn Transport>,
    pub selection: Arc<dyn SelectionAccess>,
    pub panel: Arc<dyn PanelProbe>,
    pub blacklist: Arc<dyn BlacklistJudge>,
    pub behaviors: BehaviorSet,
    pub normalizer: Normalizer,
}

/// One detection behavior per multiplexer slot.
pub struct BehaviorSet {
    pub quick_search: Arc<dyn Behavior>,
    pub select_text: Arc<dyn Behavior>,
    pub instant_capture: Arc<dyn Behavior>,
}
