/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] bandwire_transport::TransportError),

    /// Packet encoding or response decoding failed.
    #[error("frame error: {0}")]
    Frame(#[from] bandwire_frame::FrameError),

    /// Command lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] bandwire_registry::RegistryError),

    /// `reacquire` was called before any `acquire`.
    #[error("session has not been acquired")]
    NotYetAcquired,

    /// The command did not complete in time; the transport was reacquired.
    #[error("command timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The device answered with something the session cannot use.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
