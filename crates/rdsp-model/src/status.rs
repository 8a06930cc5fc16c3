use std::fmt;

const NOT_FOUND: &str = "not found";
const UNKNOWN: &str = "unknown";

/// Run state of the target container as shown on the status page.
///
/// Never cached: each page load builds a fresh value from one inspect call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerStatus {
    /// Status string reported by the runtime (`running`, `exited`, `paused`, ...).
    Reported(String),
    /// Inspection failed: container absent or runtime unreachable.
    NotFound,
    /// Inspection succeeded without a status field.
    Unknown,
}

impl ContainerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContainerStatus::Reported(s) => s,
            ContainerStatus::NotFound => NOT_FOUND,
            ContainerStatus::Unknown => UNKNOWN,
        }
    }

    pub fn class(&self) -> StatusClass {
        match self.as_str() {
            "running" => StatusClass::Running,
            "exited" | "stopped" => StatusClass::Stopped,
            _ => StatusClass::Neutral,
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual indicator of a [`ContainerStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Running,
    Stopped,
    Neutral,
}

impl StatusClass {
    /// CSS class of the status pill.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusClass::Running => "pill-running",
            StatusClass::Stopped => "pill-stopped",
            StatusClass::Neutral => "pill-unknown",
        }
    }
}
