//! Opens a [`Session`] over whichever transport the command line selected.

use std::sync::Arc;

use bandwire_frame::{Arguments, Command, Status};
use bandwire_registry::CommandRegistry;
use bandwire_session::{DeviceFamily, Response, Session, SessionConfig};
use bandwire_transport::MockTransport;
use tracing::debug;

use crate::cmd::{parse_duration, parse_hex, TransportArgs, TransportKind};
use crate::exit::{session_error, CliError, CliResult};

pub enum DeviceSession {
    Mock(Session<MockTransport>),
    #[cfg(feature = "usb")]
    Usb(Session<bandwire_transport::UsbTransport>),
    #[cfg(all(target_os = "linux", feature = "classic"))]
    Classic(Session<bandwire_transport::ClassicTransport<bandwire_transport::BluerConnector>>),
    #[cfg(feature = "ble")]
    Ble(Session<bandwire_transport::ZippyTransport<bandwire_transport::BtleLink>>),
}

macro_rules! with_session {
    ($device:expr, $session:ident => $body:expr) => {
        match $device {
            DeviceSession::Mock($session) => $body,
            #[cfg(feature = "usb")]
            DeviceSession::Usb($session) => $body,
            #[cfg(all(target_os = "linux", feature = "classic"))]
            DeviceSession::Classic($session) => $body,
            #[cfg(feature = "ble")]
            DeviceSession::Ble($session) => $body,
        }
    };
}

impl DeviceSession {
    /// Build the transport and acquire it.
    pub async fn open(args: &TransportArgs, registry: Arc<CommandRegistry>) -> CliResult<Self> {
        let config = SessionConfig {
            command_timeout: Some(parse_duration(&args.timeout)?),
        };
        debug!(transport = args.transport.as_str(), ?config, "opening session");

        match args.transport {
            TransportKind::Mock => {
                let status = Status::from_name(&args.mock_status).ok_or_else(|| {
                    CliError::usage(format!("unknown status name: {}", args.mock_status))
                })?;
                let mut mock = MockTransport::new(status);
                if let Some(reply) = &args.mock_reply {
                    mock.push_reply(parse_hex(reply)?, status);
                }
                let session = Session::with_registry(mock, registry, config);
                session
                    .acquire(())
                    .await
                    .map_err(|err| session_error("acquire failed", err))?;
                Ok(Self::Mock(session))
            }
            TransportKind::Usb => Self::open_usb(args, registry, config).await,
            TransportKind::Classic => Self::open_classic(args, registry, config).await,
            TransportKind::Ble => Self::open_ble(args, registry, config).await,
        }
    }

    #[cfg(feature = "usb")]
    async fn open_usb(
        args: &TransportArgs,
        registry: Arc<CommandRegistry>,
        config: SessionConfig,
    ) -> CliResult<Self> {
        use bandwire_transport::{UsbConfig, UsbParams, UsbTransport};

        let defaults = UsbParams::default();
        let params = UsbParams {
            vendor_id: args.vendor_id.unwrap_or(defaults.vendor_id),
            product_id: args.product_id.unwrap_or(defaults.product_id),
            serial: args.serial.clone(),
        };
        let session = Session::with_registry(UsbTransport::new(UsbConfig::default()), registry, config);
        session
            .acquire(params)
            .await
            .map_err(|err| session_error("USB acquire failed", err))?;
        Ok(Self::Usb(session))
    }

    #[cfg(not(feature = "usb"))]
    async fn open_usb(
        _args: &TransportArgs,
        _registry: Arc<CommandRegistry>,
        _config: SessionConfig,
    ) -> CliResult<Self> {
        Err(not_compiled("usb"))
    }

    #[cfg(all(target_os = "linux", feature = "classic"))]
    async fn open_classic(
        args: &TransportArgs,
        registry: Arc<CommandRegistry>,
        config: SessionConfig,
    ) -> CliResult<Self> {
        use bandwire_transport::{BluerConnector, ClassicParams, ClassicTransport};

        let params = ClassicParams::new(required_device(args)?).with_channel(args.rfcomm_channel);
        let session = Session::with_registry(ClassicTransport::new(BluerConnector), registry, config);
        session
            .acquire(params)
            .await
            .map_err(|err| session_error("RFCOMM acquire failed", err))?;
        Ok(Self::Classic(session))
    }

    #[cfg(not(all(target_os = "linux", feature = "classic")))]
    async fn open_classic(
        _args: &TransportArgs,
        _registry: Arc<CommandRegistry>,
        _config: SessionConfig,
    ) -> CliResult<Self> {
        Err(not_compiled("classic"))
    }

    #[cfg(feature = "ble")]
    async fn open_ble(
        args: &TransportArgs,
        registry: Arc<CommandRegistry>,
        config: SessionConfig,
    ) -> CliResult<Self> {
        use bandwire_transport::{BtleLink, BtleTarget, ZippyTransport};

        let target = BtleTarget::new(required_device(args)?);
        let session = Session::with_registry(ZippyTransport::new(BtleLink::new()), registry, config);
        session
            .acquire(target)
            .await
            .map_err(|err| session_error("BLE acquire failed", err))?;
        Ok(Self::Ble(session))
    }

    #[cfg(not(feature = "ble"))]
    async fn open_ble(
        _args: &TransportArgs,
        _registry: Arc<CommandRegistry>,
        _config: SessionConfig,
    ) -> CliResult<Self> {
        Err(not_compiled("ble"))
    }

    pub async fn execute(&self, command: &'static Command, args: &Arguments) -> CliResult<Response> {
        with_session!(self, session => session.execute(command, args).await)
            .map_err(|err| session_error(&format!("{command} failed"), err))
    }

    pub async fn device_family(&self) -> CliResult<DeviceFamily> {
        with_session!(self, session => session.device_family().await)
            .map_err(|err| session_error("device identification failed", err))
    }
}

#[allow(dead_code)]
fn required_device(args: &TransportArgs) -> CliResult<String> {
    args.device.clone().ok_or_else(|| {
        CliError::usage(format!(
            "--device is required for the {} transport",
            args.transport.as_str()
        ))
    })
}

#[allow(dead_code)]
fn not_compiled(feature: &str) -> CliError {
    CliError::usage(format!(
        "{feature} transport not compiled in (rebuild with the `{feature}` feature)"
    ))
}
