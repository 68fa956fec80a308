use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncSender;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use wordtap_config::Config;
use wordtap_core::behavior::{Behavior, BehaviorGuard};
use wordtap_core::gate::PatternBlacklist;
use wordtap_core::normalize::Normalizer;
use wordtap_core::selection::{PanelProbe, SelectionAccess};
use wordtap_core::transport::{Transport, TransportError};
use wordtap_types::{
    FrameMessage, InboundRequest, KeyStroke, LocalSignal, NodeRef, OutboundMessage,
    SelectionSnapshot, TriggerEvent,
};

use crate::host::{BehaviorSet, Collaborators, HostChannels};
use crate::{FrameHandle, bootstrap};


pub(crate) const FRAME_URL: &str = "https://reader.example/article";

pub(crate) fn allowed_config() -> Config {
    Config::default()
}

pub(crate) fn blocked_config() -> Config {
    Config {
        blacklist: vec!["https://reader.example/*".to_string()],
        ..Config::default()
    }
}

#[derive(Default)]
pub(crate) struct CollectingTransport {
    pub sent: Mutex<Vec<OutboundMessage>>,
    pub locals: Mutex<Vec<LocalSignal>>,
    pub forwarded: Mutex<Vec<FrameMessage>>,
}

impl CollectingTransport {
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn locals(&self) -> Vec<LocalSignal> {
        self.locals.lock().unwrap().clone()
    }

    pub fn forwarded(&self) -> Vec<FrameMessage> {
        self.forwarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CollectingTransport {
    async fn send(&self, message: OutboundMessage) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    async fn send_local(&self, signal: LocalSignal) -> Result<(), TransportError> {
        self.locals.lock().unwrap().push(signal);
        Ok(())
    }

    async fn forward(&self, message: FrameMessage) -> Result<(), TransportError> {
        self.forwarded.lock().unwrap().push(message);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct StaticSelection {
    pub text: String,
    pub sentence: String,
    pub snapshot: Option<SelectionSnapshot>,
}

impl SelectionAccess for StaticSelection {
    fn get_text(&self) -> String {
        self.text.clone()
    }

    fn get_sentence(&self) -> String {
        self.sentence.clone()
    }

    fn selection(&self) -> Option<SelectionSnapshot> {
        self.snapshot
    }

    fn text_from(&self, _selection: &SelectionSnapshot) -> String {
        self.text.clone()
    }

    fn sentence_from(&self, _selection: &SelectionSnapshot) -> String {
        self.sentence.clone()
    }
}

pub(crate) struct PanelMembers(pub Vec<NodeRef>);

impl PanelProbe for PanelMembers {
    fn contains(&self, node: &NodeRef) -> bool {
        self.0.contains(node)
    }
}

/// Open/close ledger for one behavior slot, shared with the test body.
#[derive(Default)]
pub(crate) struct Ledger {
    pub log: Mutex<Vec<String>>,
    opens: AtomicUsize,
    closes: AtomicUsize,
    active: AtomicUsize,
    peak_active: AtomicUsize,
    current_tx: Mutex<Option<AsyncSender<TriggerEvent>>>,
}

impl Ledger {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    pub fn peak_active(&self) -> usize {
        self.peak_active.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Event sender of the live generation.
    pub fn sender(&self) -> AsyncSender<TriggerEvent> {
        self.current_tx
            .lock()
            .unwrap()
            .clone()
            .expect("no live generation")
    }
}

/// Behavior double that records its lifecycle instead of listening to
/// the DOM. Its task holds the event sender until disposal, like a real
/// detector holds its listeners.
pub(crate) struct RecordingBehavior {
    name: &'static str,
    pub ledger: Arc<Ledger>,
}

impl RecordingBehavior {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ledger: Arc::new(Ledger::default()),
        }
    }
}

impl Behavior for RecordingBehavior {
    fn name(&self) -> &'static str {
        self.name
    }

    fn attach(&self, _config: Arc<Config>, events: AsyncSender<TriggerEvent>) -> BehaviorGuard {
        let generation = self.ledger.opens.fetch_add(1, Ordering::SeqCst) + 1;
        let now_active = self.ledger.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.ledger.peak_active.fetch_max(now_active, Ordering::SeqCst);
        self.ledger
            .log
            .lock()
            .unwrap()
            .push(format!("open:{generation}"));
        *self.ledger.current_tx.lock().unwrap() = Some(events.clone());

        let cancel = CancellationToken::new();
        let ledger = self.ledger.clone();
        let task = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                let _events = events;
                cancel.cancelled().await;
                ledger.active.fetch_sub(1, Ordering::SeqCst);
                ledger.closes.fetch_add(1, Ordering::SeqCst);
                ledger.log.lock().unwrap().push(format!("close:{generation}"));
            }
        });
        BehaviorGuard::new(cancel, task)
    }
}

pub(crate) struct Harness {
    pub transport: Arc<CollectingTransport>,
    pub config_tx: AsyncSender<Config>,
    pub requests_tx: AsyncSender<InboundRequest>,
    pub frames_tx: AsyncSender<FrameMessage>,
    pub keys_tx: AsyncSender<KeyStroke>,
    pub quick_search: Arc<Ledger>,
    pub select_text: Arc<Ledger>,
    pub instant_capture: Arc<Ledger>,
    pub handle: FrameHandle,
}

pub(crate) fn spawn_frame(selection: StaticSelection, panel: PanelMembers) -> Harness {
    let (config_tx, config_rx) = kanal::bounded_async(16);
    let (requests_tx, requests_rx) = kanal::bounded_async(16);
    let (frames_tx, frames_rx) = kanal::bounded_async(16);
    let (keys_tx, keys_rx) = kanal::bounded_async(16);

    let transport = Arc::new(CollectingTransport::default());
    let quick_search = RecordingBehavior::new("quick-search");
    let select_text = RecordingBehavior::new("select-text");
    let instant_capture = RecordingBehavior::new("instant-capture");
    let ledgers = (
        quick_search.ledger.clone(),
        select_text.ledger.clone(),
        instant_capture.ledger.clone(),
    );

    let collaborators = Collaborators {
        transport: transport.clone(),
        selection: Arc::new(selection),
        panel: Arc::new(panel),
        blacklist: Arc::new(PatternBlacklist::new(FRAME_URL)),
        behaviors: BehaviorSet {
            quick_search: Arc::new(quick_search),
            select_text: Arc::new(select_text),
            instant_capture: Arc::new(instant_capture),
        },
        normalizer: Normalizer::default(),
    };

    let channels = HostChannels {
        config: config_rx,
        requests: requests_rx,
        frames: frames_rx,
        keys: keys_rx,
    };

    let handle = bootstrap(channels, collaborators);

    Harness {
        transport,
        config_tx,
        requests_tx,
        frames_tx,
        keys_tx,
        quick_search: ledgers.0,
        select_text: ledgers.1,
        instant_capture: ledgers.2,
        handle,
    }
}

pub(crate) async fn wait_until(what: &str, predicate: impl Fn() -> bool) {
    timeout(Duration::from_secs(2), async {
        while !predicate() {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("timed out waiting for {what}"));
}

/// Grace period for asserting that something did NOT happen.
pub(crate) async fn settle() {
    sleep(Duration::from_millis(100)).await;
}
