use std::sync::Arc;
use std::time::Duration;

use bandwire_frame::{Arguments, Command, ResponseLayout, Status, Value};
use bandwire_registry::{catalog, CommandKey, CommandRegistry};
use bandwire_transport::{Transport, TransportError};
use bytes::Bytes;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::family::{DeviceConstants, DeviceFamily};

/// Session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound on one command exchange. On expiry the transport is
    /// reacquired and the call fails with [`SessionError::Timeout`].
    pub command_timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            command_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Outcome of a command the device answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The command has no payload; the status is the result.
    Status(Status),
    /// Payload decoded with the command's response layout.
    Parsed { value: Value, status: Status },
    /// The device reported a failure. The payload is not decoded.
    ///
    /// Any non-zero code counts, so catalogued statuses with null severity
    /// such as `AnalogMgrWriteSuccessful` land here too.
    Failed { raw: Bytes, status: Status },
    /// The command declares no response layout.
    Raw { bytes: Bytes, status: Status },
}

impl Response {
    pub fn status(&self) -> Status {
        match self {
            Self::Status(status)
            | Self::Parsed { status, .. }
            | Self::Failed { status, .. }
            | Self::Raw { status, .. } => *status,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Parsed { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Parsed { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Undecoded payload bytes, for failed and layout-less responses.
    pub fn raw(&self) -> Option<&Bytes> {
        match self {
            Self::Failed { raw, .. } => Some(raw),
            Self::Raw { bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status().is_failure()
    }
}

struct State<T: Transport> {
    transport: T,
    params: Option<T::Params>,
    family: Option<DeviceFamily>,
}

/// A connection to one device.
///
/// All operations go through a single async mutex, so at most one command is
/// in flight at a time. Callers queue on the lock in arrival order.
pub struct Session<T: Transport> {
    state: Mutex<State<T>>,
    registry: Arc<CommandRegistry>,
    config: SessionConfig,
}

impl<T: Transport> std::fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("commands", &self.registry.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Transport> Session<T> {
    /// A session over `transport` using the built-in command catalog.
    pub fn new(transport: T) -> Result<Self> {
        Ok(Self::with_registry(
            transport,
            CommandRegistry::builtin()?,
            SessionConfig::default(),
        ))
    }

    pub fn with_registry(transport: T, registry: Arc<CommandRegistry>, config: SessionConfig) -> Self {
        Self {
            state: Mutex::new(State {
                transport,
                params: None,
                family: None,
            }),
            registry,
            config,
        }
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Bind the transport. Forgets the cached device family.
    pub async fn acquire(&self, params: T::Params) -> Result<()> {
        let mut state = self.state.lock().await;
        state.family = None;
        state.transport.acquire(&params).await?;
        info!(?params, "session acquired");
        state.params = Some(params);
        Ok(())
    }

    /// Replay the last [`acquire`](Self::acquire).
    pub async fn reacquire(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        Self::reacquire_locked(&mut state).await
    }

    async fn reacquire_locked(state: &mut State<T>) -> Result<()> {
        let params = state.params.clone().ok_or(SessionError::NotYetAcquired)?;
        state.family = None;
        state.transport.acquire(&params).await?;
        debug!(?params, "session reacquired");
        Ok(())
    }

    /// Transport-specific recovery.
    pub async fn reset(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        state.transport.reset().await?;
        Ok(())
    }

    /// The device family, identifying the device on first use.
    pub async fn device_family(&self) -> Result<DeviceFamily> {
        let mut state = self.state.lock().await;
        if let Some(family) = state.family {
            return Ok(family);
        }

        let response = self
            .run(
                &mut state,
                &catalog::CORE_MODULE_GET_API_VERSION,
                &Arguments::new(),
            )
            .await?;
        let version = match &response {
            Response::Parsed { value, .. } => value.as_u64(),
            _ => None,
        }
        .ok_or_else(|| {
            SessionError::UnexpectedResponse(format!(
                "API version query answered {}",
                response.status()
            ))
        })?;

        let family = DeviceFamily::from_api_version(version);
        info!(api_version = version, %family, "device identified");
        state.family = Some(family);
        Ok(family)
    }

    /// Size constants for the connected device's family.
    pub async fn device_constants(&self) -> Result<&'static DeviceConstants> {
        Ok(self.device_family().await?.constants())
    }

    /// Build, send and interpret one command.
    pub async fn execute<'k>(
        &self,
        key: impl Into<CommandKey<'k>>,
        args: &Arguments,
    ) -> Result<Response> {
        let command = self.registry.lookup(key)?;
        let mut state = self.state.lock().await;
        self.run(&mut state, command, args).await
    }

    async fn run(&self, state: &mut State<T>, command: &Command, args: &Arguments) -> Result<Response> {
        let built = command.build(args)?;
        debug!(
            %command,
            data_length = built.data_length,
            response_len = built.response_len,
            "executing"
        );

        let exchange = state.transport.communicate(
            &built.packet,
            built.response_len,
            built.transfer.as_deref(),
        );
        let outcome = match self.config.command_timeout {
            Some(limit) => tokio::time::timeout(limit, exchange).await.map_err(|_| limit),
            None => Ok(exchange.await),
        };
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(limit) => {
                warn!(%command, ?limit, "command timed out, reacquiring");
                if let Err(err) = Self::reacquire_locked(state).await {
                    warn!(error = %err, "reacquire after timeout failed");
                }
                return Err(SessionError::Timeout(limit));
            }
        };

        let (payload, status) = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                if recoverable(&err) {
                    if let Err(reset) = state.transport.reset().await {
                        warn!(error = %reset, "transport reset failed");
                    }
                }
                return Err(err.into());
            }
        };

        let layout = args.response_override().unwrap_or(command.response);
        let name = command.name.unwrap_or("response");
        let response = match layout {
            ResponseLayout::StatusOnly => Response::Status(status),
            _ if status.is_failure() => Response::Failed {
                raw: payload,
                status,
            },
            ResponseLayout::Layout(field) => Response::Parsed {
                value: field.parse(name, &payload)?,
                status,
            },
            ResponseLayout::Unspecified => Response::Raw {
                bytes: payload,
                status,
            },
        };
        debug!(%command, %status, "executed");
        Ok(response)
    }
}

/// Errors after which the transport may be out of step with the device.
fn recoverable(err: &TransportError) -> bool {
    !matches!(
        err,
        TransportError::Unsupported(_) | TransportError::NotAcquired | TransportError::Framing(_)
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bandwire_frame::{Facility, FrameError, Severity};
    use bandwire_transport::MockTransport;

    use super::*;

    async fn mock_session(mock: MockTransport) -> Session<MockTransport> {
        let session = Session::new(mock).unwrap();
        session.acquire(()).await.unwrap();
        session
    }

    #[tokio::test]
    async fn newer_family_is_detected_and_cached() {
        let mock = MockTransport::default().with_reply(31u32.to_le_bytes().to_vec(), Status::SUCCESS);
        let log = mock.log();
        let session = mock_session(mock).await;

        let constants = session.device_constants().await.unwrap();
        assert_eq!(constants.family, DeviceFamily::Envoy);
        assert_eq!(log.exchanges(), 1);
        assert_eq!(
            &log.packets()[0][..],
            &[0xF9, 0x2E, 0x86, 0x76, 4, 0, 0, 0]
        );

        let again = session.device_constants().await.unwrap();
        assert!(std::ptr::eq(constants, again));
        assert_eq!(log.exchanges(), 1);
    }

    #[tokio::test]
    async fn older_family_from_zero_filled_mock() {
        let mock = MockTransport::default();
        let session = mock_session(mock).await;
        assert_eq!(session.device_family().await.unwrap(), DeviceFamily::Cargo);
    }

    #[tokio::test]
    async fn acquire_forgets_family() {
        let mock = MockTransport::default()
            .with_reply(31u32.to_le_bytes().to_vec(), Status::SUCCESS)
            .with_reply(12u32.to_le_bytes().to_vec(), Status::SUCCESS);
        let log = mock.log();
        let session = mock_session(mock).await;

        assert_eq!(session.device_family().await.unwrap(), DeviceFamily::Envoy);
        session.reacquire().await.unwrap();
        assert_eq!(session.device_family().await.unwrap(), DeviceFamily::Cargo);
        assert_eq!(log.exchanges(), 2);
        assert_eq!(log.acquires(), 2);
    }

    #[tokio::test]
    async fn reacquire_before_acquire_fails() {
        let session = Session::new(MockTransport::default()).unwrap();
        assert!(matches!(
            session.reacquire().await,
            Err(SessionError::NotYetAcquired)
        ));
    }

    #[tokio::test]
    async fn failed_status_returns_raw_bytes() {
        let failure = Status::new(true, Severity::Error, Facility::LIBRARY_JUTIL, 8);
        let mock = MockTransport::default().with_reply(vec![0xAA; 4], failure);
        let session = mock_session(mock).await;

        let response = session
            .execute("CoreModuleGetApiVersion", &Arguments::new())
            .await
            .unwrap();
        assert_eq!(
            response,
            Response::Failed {
                raw: Bytes::from(vec![0xAA; 4]),
                status: failure
            }
        );
        assert!(response.is_failure());
        assert!(session.device_family().await.is_err());
    }

    #[tokio::test]
    async fn null_severity_with_nonzero_code_is_a_failure() {
        let written = Status::from_name("AnalogMgrWriteSuccessful").unwrap();
        assert!(!written.is_error());
        let mock = MockTransport::default().with_reply(31u32.to_le_bytes().to_vec(), written);
        let session = mock_session(mock).await;

        let response = session
            .execute("CoreModuleGetApiVersion", &Arguments::new())
            .await
            .unwrap();
        assert_eq!(
            response,
            Response::Failed {
                raw: Bytes::from_static(&[31, 0, 0, 0]),
                status: written
            }
        );
        assert_eq!(response.value(), None);
    }

    #[tokio::test]
    async fn status_only_command_returns_status() {
        let busy = Status::from_name("SystemSettingsOperationBusy").unwrap();
        let mock = MockTransport::new(busy);
        let session = mock_session(mock).await;

        let log = session.state.lock().await.transport.log();
        let response = session.execute("LoggerFlush", &Arguments::new()).await.unwrap();
        assert!(log.transfers().is_empty());
        assert_eq!(response, Response::Status(busy));
    }

    #[tokio::test]
    async fn missing_argument_fails_before_any_io() {
        let mock = MockTransport::default();
        let log = mock.log();
        let session = mock_session(mock).await;

        let result = session.execute("EFlashRead", &Arguments::new()).await;
        assert!(matches!(
            result,
            Err(SessionError::Frame(FrameError::MissingArgument { .. }))
        ));
        assert_eq!(log.exchanges(), 0);
    }

    #[tokio::test]
    async fn unknown_command_is_a_registry_error() {
        let session = mock_session(MockTransport::default()).await;
        let result = session.execute("NoSuchCommand", &Arguments::new()).await;
        assert!(matches!(result, Err(SessionError::Registry(_))));
    }

    #[tokio::test]
    async fn response_override_changes_interpretation() {
        let mock = MockTransport::default().with_reply(vec![1, 2, 3, 4], Status::SUCCESS);
        let session = mock_session(mock).await;

        let args = Arguments::new().response(ResponseLayout::Unspecified);
        let response = session
            .execute("CoreModuleGetApiVersion", &args)
            .await
            .unwrap();
        assert_eq!(response.raw().map(|b| &b[..]), Some(&[1u8, 2, 3, 4][..]));
    }

    struct Flaky {
        resets: usize,
        acquires: usize,
        hang: bool,
    }

    #[async_trait]
    impl Transport for Flaky {
        type Params = ();

        async fn acquire(&mut self, _params: &()) -> bandwire_transport::Result<()> {
            self.acquires += 1;
            Ok(())
        }

        async fn send(&mut self, data: &[u8], _bulk: bool) -> bandwire_transport::Result<usize> {
            if self.hang {
                std::future::pending::<()>().await;
            }
            Ok(data.len())
        }

        async fn read_some(&mut self, _max: usize) -> bandwire_transport::Result<Bytes> {
            Err(TransportError::Usb("stall".into()))
        }

        async fn reset(&mut self) -> bandwire_transport::Result<()> {
            self.resets += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn transport_failure_resets_then_surfaces() {
        let flaky = Flaky {
            resets: 0,
            acquires: 0,
            hang: false,
        };
        let session = Session::new(flaky).unwrap();
        session.acquire(()).await.unwrap();

        let result = session
            .execute("CoreModuleGetApiVersion", &Arguments::new())
            .await;
        assert!(matches!(
            result,
            Err(SessionError::Transport(TransportError::Usb(_)))
        ));
        assert_eq!(session.state.lock().await.transport.resets, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_reacquires() {
        let flaky = Flaky {
            resets: 0,
            acquires: 0,
            hang: true,
        };
        let session = Session::with_registry(
            flaky,
            CommandRegistry::builtin().unwrap(),
            SessionConfig {
                command_timeout: Some(Duration::from_secs(2)),
            },
        );
        session.acquire(()).await.unwrap();

        let result = session
            .execute("CoreModuleGetApiVersion", &Arguments::new())
            .await;
        assert!(matches!(result, Err(SessionError::Timeout(_))));
        assert_eq!(session.state.lock().await.transport.acquires, 2);
    }

    #[tokio::test]
    async fn concurrent_calls_are_serialized() {
        let mock = MockTransport::default();
        let log = mock.log();
        let session = Arc::new(mock_session(mock).await);

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let session = Arc::clone(&session);
                tokio::spawn(async move {
                    session
                        .execute("CoreModuleGetApiVersion", &Arguments::new())
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }
        assert_eq!(log.exchanges(), 8);
    }
}
