use thiserror::Error;

/// Top-level error type for Checklist.
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// The delivery endpoint acknowledged a message with `ok: false`.
    #[error("{0}")]
    Delivery(String),

    /// Transport or response error talking to the delivery endpoint.
    #[error("channel error: {0}")]
    Channel(String),

    /// Configuration or form definition error.
    #[error("config error: {0}")]
    Config(String),

    /// Unknown field or choice.
    #[error("form error: {0}")]
    Form(String),

    /// Local store error.
    #[error("store error: {0}")]
    Store(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
