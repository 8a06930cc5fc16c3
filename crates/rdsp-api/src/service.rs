use rdsp_model::{ContainerStatus, LifecycleAction, PanelConfig};
use rdsp_runtime::ContainerRuntime;
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// Panel operations independent of HTTP: token check, status query, actions.
///
/// Holds only the immutable configuration and the runtime client, so one
/// instance is shared by all requests without locking.
pub struct PanelService<R> {
    config: PanelConfig,
    runtime: R,
}

impl<R> PanelService<R>
where
    R: ContainerRuntime,
{
    pub fn new(config: PanelConfig, runtime: R) -> Self {
        Self { config, runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Accepts the request only when `token` equals the admin secret.
    pub fn authorize(&self, token: Option<&str>) -> Result<(), ApiError> {
        match token {
            Some(t) if self.config.admin_token.matches(t) => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }

    /// Queries the container status; never fails.
    ///
    /// Any inspect error becomes [`ContainerStatus::NotFound`] so the status
    /// page always renders.
    pub async fn status(&self) -> ContainerStatus {
        match self.runtime.inspect_status(&self.config.container).await {
            Ok(Some(status)) => ContainerStatus::Reported(status),
            Ok(None) => ContainerStatus::Unknown,
            Err(err) => {
                debug!(
                    container = %self.config.container,
                    kind = %err.kind(),
                    error = %err,
                    "inspect failed, showing sentinel status"
                );
                ContainerStatus::NotFound
            }
        }
    }

    /// Runs `action` once against the container and returns the confirmation text.
    pub async fn perform(&self, action: LifecycleAction) -> Result<String, ApiError> {
        let container = &self.config.container;

        match self.runtime.apply(container, action).await {
            Ok(()) => {
                info!(%container, %action, "lifecycle action completed");
                Ok(action.confirmation(container))
            }
            Err(err) => {
                warn!(
                    %container,
                    %action,
                    kind = %err.kind(),
                    error = %err,
                    "lifecycle action failed"
                );
                Err(ApiError::Runtime(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rdsp_model::AdminToken;
    use rdsp_runtime::{
        RuntimeError, RuntimeErrorKind,
        testing::{FakeRuntime, no_such_container},
    };

    use super::*;

    fn service(runtime: FakeRuntime) -> PanelService<FakeRuntime> {
        let cfg = PanelConfig {
            admin_token: AdminToken::new("secret123"),
            ..Default::default()
        };
        PanelService::new(cfg, runtime)
    }

    #[test]
    fn authorize_requires_exact_token() {
        let svc = service(FakeRuntime::with_status("running"));

        assert!(svc.authorize(Some("secret123")).is_ok());
        assert!(matches!(
            svc.authorize(Some("wrong")),
            Err(ApiError::Unauthorized)
        ));
        assert!(matches!(svc.authorize(Some("")), Err(ApiError::Unauthorized)));
        assert!(matches!(svc.authorize(None), Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn status_reports_runtime_value() {
        let svc = service(FakeRuntime::with_status("exited"));

        assert_eq!(
            svc.status().await,
            ContainerStatus::Reported("exited".into())
        );
        assert_eq!(svc.runtime().last_name().as_deref(), Some("raft_rds"));
    }

    #[tokio::test]
    async fn status_degrades_to_sentinels() {
        let missing = service(FakeRuntime::missing("raft_rds"));
        assert_eq!(missing.status().await, ContainerStatus::NotFound);

        let unreachable = service(FakeRuntime::unreachable());
        assert_eq!(unreachable.status().await, ContainerStatus::NotFound);

        let blank = service(FakeRuntime::without_status());
        assert_eq!(blank.status().await, ContainerStatus::Unknown);
    }

    #[tokio::test]
    async fn status_is_queried_every_time() {
        let svc = service(FakeRuntime::with_status("running"));
        svc.status().await;
        svc.status().await;
        assert_eq!(svc.runtime().inspect_calls(), 2);
    }

    #[tokio::test]
    async fn perform_returns_confirmation() {
        let svc = service(FakeRuntime::with_status("exited"));

        let body = svc.perform(LifecycleAction::Start).await.unwrap();
        assert_eq!(body, "Started raft_rds");
        assert_eq!(svc.runtime().calls(LifecycleAction::Start), 1);
        assert_eq!(svc.runtime().total_action_calls(), 1);
    }

    #[tokio::test]
    async fn perform_passes_runtime_error_through() {
        let err = RuntimeError::new(RuntimeErrorKind::Other, "container already started");
        let svc = service(FakeRuntime::with_status("running").failing_actions(err));

        match svc.perform(LifecycleAction::Start).await {
            Err(ApiError::Runtime(e)) => assert_eq!(e.to_string(), "container already started"),
            other => panic!("expected runtime error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn perform_against_missing_container() {
        let svc = service(FakeRuntime::missing("raft_rds"));

        let err = svc.perform(LifecycleAction::Restart).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            no_such_container("raft_rds").to_string()
        );
        assert_eq!(svc.runtime().calls(LifecycleAction::Restart), 1);
    }
}
