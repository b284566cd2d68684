//! Protocol session for the band.
//!
//! A [`Session`] owns one [`Transport`](bandwire_transport::Transport) and
//! serializes every command through it. It identifies the device family on
//! first use and interprets replies against the command registry:
//!
//! ```no_run
//! # async fn demo() -> bandwire_session::Result<()> {
//! use bandwire_frame::Arguments;
//! use bandwire_session::Session;
//! use bandwire_transport::MockTransport;
//!
//! let session = Session::new(MockTransport::default())?;
//! session.acquire(()).await?;
//! let family = session.device_family().await?;
//! let reply = session
//!     .execute("CoreModuleGetApiVersion", &Arguments::new())
//!     .await?;
//! println!("{family}: {:?}", reply.value());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod family;
pub mod session;

pub use error::{Result, SessionError};
pub use family::{DeviceConstants, DeviceFamily, ENVOY_API_THRESHOLD};
pub use session::{Response, Session, SessionConfig};
