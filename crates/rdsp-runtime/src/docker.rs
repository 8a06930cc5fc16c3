use async_trait::async_trait;
use bollard::{
    API_DEFAULT_VERSION, Docker,
    container::{
        InspectContainerOptions, RestartContainerOptions, StartContainerOptions,
        StopContainerOptions,
    },
    models::ContainerInspectResponse,
};

use crate::{ContainerRuntime, RuntimeError, RuntimeResult};

/// Seconds the client waits on a single daemon round-trip.
const CLIENT_TIMEOUT_SECS: u64 = 120;

/// [`ContainerRuntime`] backed by the Docker Engine API.
///
/// The client is built per call: bollard rejects a socket path that does not
/// exist yet, and a missing daemon must fail the request, not the process.
#[derive(Debug, Clone)]
pub struct DockerRuntime {
    socket: String,
}

impl DockerRuntime {
    /// Runtime talking to the daemon listening on `socket`.
    pub fn new(socket: impl Into<String>) -> Self {
        Self {
            socket: socket.into(),
        }
    }

    fn client(&self) -> RuntimeResult<Docker> {
        Docker::connect_with_socket(&self.socket, CLIENT_TIMEOUT_SECS, API_DEFAULT_VERSION)
            .map_err(RuntimeError::from)
    }
}

/// Status field of an inspect response; empty or absent means `None`.
fn status_of(info: &ContainerInspectResponse) -> Option<String> {
    info.state
        .as_ref()
        .and_then(|s| s.status.as_ref())
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn inspect_status(&self, name: &str) -> RuntimeResult<Option<String>> {
        let info = self
            .client()?
            .inspect_container(name, None::<InspectContainerOptions>)
            .await?;
        Ok(status_of(&info))
    }

    async fn start(&self, name: &str) -> RuntimeResult<()> {
        self.client()?
            .start_container(name, None::<StartContainerOptions<String>>)
            .await?;
        Ok(())
    }

    async fn stop(&self, name: &str) -> RuntimeResult<()> {
        self.client()?
            .stop_container(name, None::<StopContainerOptions>)
            .await?;
        Ok(())
    }

    async fn restart(&self, name: &str) -> RuntimeResult<()> {
        self.client()?
            .restart_container(name, None::<RestartContainerOptions>)
            .await?;
        Ok(())
    }
}
