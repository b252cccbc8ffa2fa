//! Error types shared by the router core and the browser host.

/// A controller method threw, or its factory rejected.
///
/// Carries the stringified JS exception; the controller is opaque so nothing
/// more structured is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("controller call `{op}` failed: {message}")]
pub struct ControllerError {
    pub op: &'static str,
    pub message: String,
}

impl ControllerError {
    #[must_use]
    pub fn new(op: &'static str, message: impl Into<String>) -> Self {
        Self { op, message: message.into() }
    }
}

/// Failures surfaced by `RouterCore` input and frame handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("controller not initialized")]
    NotInitialized,

    #[error("controller initialization failed: {0}")]
    InitFailed(String),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Configuration parse or validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Startup failures in the browser host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("canvas element `{0}` not found")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("failed to register `{event}` handler: {message}")]
    Listener { event: &'static str, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}
