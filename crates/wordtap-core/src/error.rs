#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("configuration source closed")]
    ConfigSourceClosed,

    #[error("configuration gate closed")]
    GateClosed,
}
