use std::sync::Arc;

use kanal::AsyncReceiver;
use regex::Regex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wordtap_config::Config;

use crate::error::OrchestratorError;

/// Configuration after blacklist filtering; `None` means this frame is
/// suppressed.
pub type GatedConfig = Option<Arc<Config>>;

/// Pure predicate deciding whether a configuration blacklists this frame.
pub trait BlacklistJudge: Send + Sync {
    fn is_blacklisted(&self, config: &Config) -> bool;
}

/// Frame-URL judge over the config's match patterns. Whitelist wins.
pub struct PatternBlacklist {
    url: String,
}

impl PatternBlacklist {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn matches_any(&self, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| {
            pattern_to_regex(pattern).is_some_and(|re| re.is_match(&self.url))
        })
    }
}

impl BlacklistJudge for PatternBlacklist {
    fn is_blacklisted(&self, config: &Config) -> bool {
        if self.matches_any(&config.whitelist) {
            return false;
        }
        self.matches_any(&config.blacklist)
    }
}

/// Compile a `https://*.example.com/*` style match pattern. Invalid
/// patterns match nothing.
fn pattern_to_regex(pattern: &str) -> Option<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            c if "\\.+?^$()[]{}|".contains(c) => {
                expr.push('\\');
                expr.push(c);
            }
            c => expr.push(c),
        }
    }
    expr.push('$');
    Regex::new(&expr).ok()
}

fn is_suppressed(judge: &dyn BlacklistJudge, config: &Config) -> bool {
    // A globally disabled extension behaves like a blacklisted page.
    !config.active || judge.is_blacklisted(config)
}

/// Gate task: applies the judge once per upstream emission and multicasts
/// the gated result to every slot over the watch channel.
///
/// A closed upstream source is fatal to the frame: `cancel` is fired so
/// every sibling task winds down, and the error is surfaced once through
/// this task's result. A fresh frame load is the recovery path.
pub async fn run_config_gate(
    source: AsyncReceiver<Config>,
    judge: Arc<dyn BlacklistJudge>,
    gate_tx: watch::Sender<GatedConfig>,
    cancel: CancellationToken,
) -> Result<(), OrchestratorError> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            emission = source.recv() => {
                let Ok(config) = emission else {
                    cancel.cancel();
                    return Err(OrchestratorError::ConfigSourceClosed);
                };
                let gated = if is_suppressed(judge.as_ref(), &config) {
                    None
                } else {
                    Some(Arc::new(config))
                };
                tracing::debug!(suppressed = gated.is_none(), "configuration emission");
                if gate_tx.send(gated).is_err() {
                    // Every slot is gone; nothing left to gate.
                    return Ok(());
                }
            }
        }
    }
}
