//! Container runtime boundary of the panel.
//!
//! [`ContainerRuntime`] is the only way the rest of the workspace talks to the
//! container engine. [`DockerRuntime`] implements it over the Docker Engine
//! API on a local Unix socket.

mod docker;
pub use docker::DockerRuntime;

mod error;
pub use error::{RuntimeError, RuntimeErrorKind, RuntimeResult};

mod runtime;
pub use runtime::ContainerRuntime;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
