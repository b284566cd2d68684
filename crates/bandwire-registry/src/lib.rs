//! Command registry for the band protocol.
//!
//! The registry is an immutable table built once from static descriptors.
//! Every lookup path (name, raw 2-byte code, `(facility, code, transferless)`
//! triple) resolves to the same `&'static Command`.

pub mod catalog;
pub mod error;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::{CommandKey, CommandRegistry, IncomingCommand};
