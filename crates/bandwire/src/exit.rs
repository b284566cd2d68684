use std::fmt;
use std::io;

use bandwire_frame::FrameError;
use bandwire_registry::RegistryError;
use bandwire_session::SessionError;
use bandwire_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
/// The device answered with a failure status.
pub const DEVICE_FAILURE: i32 = 2;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(USAGE, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::ConnectionRefused => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::MissingArgument { .. }
        | FrameError::MissingTransfer { .. }
        | FrameError::MissingDataLength { .. }
        | FrameError::UnexpectedArgument { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn registry_error(context: &str, err: RegistryError) -> CliError {
    match err {
        RegistryError::UnknownCommand(_) => CliError::new(USAGE, format!("{context}: {err}")),
        RegistryError::Frame(err) => frame_error(context, err),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Io(source) => io_error(context, source),
        TransportError::Framing(err) => frame_error(context, err),
        TransportError::Timeout(_) | TransportError::LockTimeout(_) => {
            CliError::new(TIMEOUT, format!("{context}: {err}"))
        }
        TransportError::Unsupported(_) => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn session_error(context: &str, err: SessionError) -> CliError {
    match err {
        SessionError::Transport(err) => transport_error(context, err),
        SessionError::Frame(err) => frame_error(context, err),
        SessionError::Registry(err) => registry_error(context, err),
        SessionError::Timeout(_) => CliError::new(TIMEOUT, format!("{context}: {err}")),
        SessionError::UnexpectedResponse(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_is_usage() {
        let err = SessionError::Frame(FrameError::MissingArgument {
            command: "X".into(),
            field: "Y".into(),
        });
        assert_eq!(session_error("exec", err).code, USAGE);
    }

    #[test]
    fn nested_timeouts_map_to_124() {
        let err = SessionError::Transport(TransportError::LockTimeout(
            std::time::Duration::from_secs(1),
        ));
        assert_eq!(session_error("exec", err).code, TIMEOUT);
        let err = SessionError::Timeout(std::time::Duration::from_secs(1));
        assert_eq!(session_error("exec", err).code, TIMEOUT);
    }

    #[test]
    fn unknown_command_is_usage() {
        let err = RegistryError::UnknownCommand("Nope".into());
        let cli = registry_error("lookup", err);
        assert_eq!(cli.code, USAGE);
        assert!(cli.message.starts_with("lookup: "));
    }
}
