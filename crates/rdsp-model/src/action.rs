use std::fmt;

/// Lifecycle operation an operator can request for the target container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleAction {
    Start,
    Stop,
    Restart,
}

impl LifecycleAction {
    pub const ALL: [LifecycleAction; 3] = [Self::Start, Self::Stop, Self::Restart];

    /// Lowercase name, also the last segment of the action route.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleAction::Start => "start",
            LifecycleAction::Stop => "stop",
            LifecycleAction::Restart => "restart",
        }
    }

    /// HTTP route of this action, e.g. `/api/start`.
    pub fn route(&self) -> &'static str {
        match self {
            LifecycleAction::Start => "/api/start",
            LifecycleAction::Stop => "/api/stop",
            LifecycleAction::Restart => "/api/restart",
        }
    }

    /// Confirmation returned to the operator once the runtime accepted the call.
    ///
    /// ```
    /// use rdsp_model::LifecycleAction;
    ///
    /// assert_eq!(LifecycleAction::Stop.confirmation("raft_rds"), "Stopped raft_rds");
    /// ```
    pub fn confirmation(&self, container: &str) -> String {
        let verb = match self {
            LifecycleAction::Start => "Started",
            LifecycleAction::Stop => "Stopped",
            LifecycleAction::Restart => "Restarted",
        };
        format!("{verb} {container}")
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
