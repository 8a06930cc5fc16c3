use async_trait::async_trait;
use rdsp_model::LifecycleAction;

use crate::error::RuntimeResult;

/// Container engine operations used by the panel.
///
/// Containers are addressed by name on every call; implementations keep no
/// per-container state between calls.
#[async_trait]
pub trait ContainerRuntime: Send + Sync + 'static {
    /// Current status string of the container (`running`, `exited`, ...).
    ///
    /// `Ok(None)` means the container exists but the runtime reported no status.
    async fn inspect_status(&self, name: &str) -> RuntimeResult<Option<String>>;

    async fn start(&self, name: &str) -> RuntimeResult<()>;

    async fn stop(&self, name: &str) -> RuntimeResult<()>;

    async fn restart(&self, name: &str) -> RuntimeResult<()>;

    /// Invokes the operation matching `action`, exactly once.
    async fn apply(&self, name: &str, action: LifecycleAction) -> RuntimeResult<()> {
        match action {
            LifecycleAction::Start => self.start(name).await,
            LifecycleAction::Stop => self.stop(name).await,
            LifecycleAction::Restart => self.restart(name).await,
        }
    }
}
