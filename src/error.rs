use thiserror::Error;

/// Error returned by a subscriber handler.
///
/// Handlers are plain closures, so any boxed error works; the bus never
/// inspects it, it only hands it back to whoever called `publish`.
pub type HandlerError = Box<dyn std::error::Error>;

/// Result type handlers return.
pub type HandlerResult = Result<(), HandlerError>;

#[derive(Debug, Error)]
pub enum BusError {
    /// A caller-supplied argument was rejected (e.g. an empty topic name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation needs a feature that this bus was configured without.
    #[error("{0} not supported by this bus configuration")]
    Unsupported(&'static str),
    /// A handler failed; the rest of that dispatch was skipped.
    #[error("handler for topic {topic:?} failed: {source}")]
    Handler {
        topic: String,
        #[source]
        source: HandlerError,
    },
    /// Every token this bus can issue has been handed out.
    #[error("no subscription tokens left on this bus")]
    TokensExhausted,
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
