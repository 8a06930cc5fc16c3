//! In-memory [`ContainerRuntime`] for handler tests.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use bollard::errors::Error as DockerError;
use rdsp_model::LifecycleAction;

use crate::{ContainerRuntime, RuntimeError, RuntimeErrorKind, RuntimeResult};

/// Scripted runtime that counts every call it receives.
///
/// Inspect returns the configured status; lifecycle calls succeed unless a
/// failure was configured, in which case every one of them returns it.
#[derive(Debug)]
pub struct FakeRuntime {
    status: RuntimeResult<Option<String>>,
    action_failure: Option<RuntimeError>,
    inspect_calls: AtomicUsize,
    action_calls: Mutex<HashMap<LifecycleAction, usize>>,
    last_name: Mutex<Option<String>>,
}

impl FakeRuntime {
    /// Container exists with the given status; actions succeed.
    pub fn with_status(status: &str) -> Self {
        Self::new(Ok(Some(status.to_string())))
    }

    /// Container exists but the runtime reports no status.
    pub fn without_status() -> Self {
        Self::new(Ok(None))
    }

    /// Container does not exist: inspect and actions fail with the daemon's 404.
    pub fn missing(name: &str) -> Self {
        let err = no_such_container(name);
        Self::new(Err(err.clone())).failing_actions(err)
    }

    /// Daemon socket is gone: every call fails.
    pub fn unreachable() -> Self {
        let err = RuntimeError::new(
            RuntimeErrorKind::Unreachable,
            "error trying to connect: No such file or directory (os error 2)",
        );
        Self::new(Err(err.clone())).failing_actions(err)
    }

    /// Makes every lifecycle call fail with `err`.
    pub fn failing_actions(mut self, err: RuntimeError) -> Self {
        self.action_failure = Some(err);
        self
    }

    pub fn inspect_calls(&self) -> usize {
        self.inspect_calls.load(Ordering::SeqCst)
    }

    pub fn calls(&self, action: LifecycleAction) -> usize {
        self.action_calls
            .lock()
            .map(|m| m.get(&action).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn total_action_calls(&self) -> usize {
        LifecycleAction::ALL.iter().map(|a| self.calls(*a)).sum()
    }

    /// Container name passed to the most recent call.
    pub fn last_name(&self) -> Option<String> {
        self.last_name.lock().ok().and_then(|n| n.clone())
    }

    fn new(status: RuntimeResult<Option<String>>) -> Self {
        Self {
            status,
            action_failure: None,
            inspect_calls: AtomicUsize::new(0),
            action_calls: Mutex::new(HashMap::new()),
            last_name: Mutex::new(None),
        }
    }

    fn record_name(&self, name: &str) {
        if let Ok(mut last) = self.last_name.lock() {
            *last = Some(name.to_string());
        }
    }

    fn record(&self, name: &str, action: LifecycleAction) -> RuntimeResult<()> {
        self.record_name(name);
        if let Ok(mut calls) = self.action_calls.lock() {
            *calls.entry(action).or_insert(0) += 1;
        }
        match &self.action_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Error the Docker daemon returns for an unknown container name.
pub fn no_such_container(name: &str) -> RuntimeError {
    RuntimeError::from(DockerError::DockerResponseServerError {
        status_code: 404,
        message: format!("No such container: {name}"),
    })
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn inspect_status(&self, name: &str) -> RuntimeResult<Option<String>> {
        self.record_name(name);
        self.inspect_calls.fetch_add(1, Ordering::SeqCst);
        self.status.clone()
    }

    async fn start(&self, name: &str) -> RuntimeResult<()> {
        self.record(name, LifecycleAction::Start)
    }

    async fn stop(&self, name: &str) -> RuntimeResult<()> {
        self.record(name, LifecycleAction::Stop)
    }

    async fn restart(&self, name: &str) -> RuntimeResult<()> {
        self.record(name, LifecycleAction::Restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn apply_dispatches_to_matching_operation_once() {
        let rt = FakeRuntime::with_status("running");

        for action in LifecycleAction::ALL {
            rt.apply("raft_rds", action).await.unwrap();
            assert_eq!(rt.calls(action), 1, "{action} should be called once");
        }
        assert_eq!(rt.total_action_calls(), 3);
        assert_eq!(rt.inspect_calls(), 0);
        assert_eq!(rt.last_name().as_deref(), Some("raft_rds"));
    }

    #[tokio::test]
    async fn missing_container_fails_everything() {
        let rt = FakeRuntime::missing("raft_rds");

        let err = rt.inspect_status("raft_rds").await.unwrap_err();
        assert_eq!(err.kind(), RuntimeErrorKind::NotFound);

        let err = rt.apply("raft_rds", LifecycleAction::Stop).await.unwrap_err();
        assert!(err.to_string().contains("No such container: raft_rds"));
        assert_eq!(rt.calls(LifecycleAction::Stop), 1);
    }

    #[tokio::test]
    async fn status_without_value() {
        let rt = FakeRuntime::without_status();
        assert_eq!(rt.inspect_status("raft_rds").await.unwrap(), None);
        assert_eq!(rt.inspect_calls(), 1);
    }
}
