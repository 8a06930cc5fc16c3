use std::{
    fmt,
    net::{Ipv4Addr, SocketAddr},
};

use crate::{
    constants::{DEFAULT_ADMIN_TOKEN, DEFAULT_DOCKER_SOCKET, DEFAULT_PORT, TARGET_CONTAINER},
    error::{ModelError, ModelResult},
};

/// Admin secret required by the action routes.
pub const ENV_ADMIN_TOKEN: &str = "ADMIN_TOKEN";
/// TCP port of the HTTP server.
pub const ENV_PANEL_PORT: &str = "PANEL_PORT";
/// Unix socket of the Docker daemon.
pub const ENV_DOCKER_SOCKET: &str = "DOCKER_SOCKET";

/// Static credential compared against the `X-Admin-Token` header.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminToken(String);

impl AdminToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Exact comparison with a request-supplied token.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Whether the compiled-in fallback is in use.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_ADMIN_TOKEN
    }
}

impl Default for AdminToken {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_TOKEN)
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(<redacted>)")
    }
}

/// Process-wide panel configuration.
///
/// Built once at process entry and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub admin_token: AdminToken,
    /// Name of the managed container. Always [`TARGET_CONTAINER`] outside tests.
    pub container: String,
    pub port: u16,
    pub docker_socket: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            admin_token: AdminToken::default(),
            container: TARGET_CONTAINER.to_string(),
            port: DEFAULT_PORT,
            docker_socket: DEFAULT_DOCKER_SOCKET.to_string(),
        }
    }
}

impl PanelConfig {
    /// Reads `ADMIN_TOKEN`, `PANEL_PORT` and `DOCKER_SOCKET` from the process environment.
    pub fn from_env() -> ModelResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ModelResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut cfg = Self::default();

        if let Some(token) = get(ENV_ADMIN_TOKEN) {
            cfg.admin_token = AdminToken::new(token);
        }
        if let Some(port) = get(ENV_PANEL_PORT) {
            cfg.port = port.trim().parse().map_err(|_| ModelError::InvalidEnv {
                var: ENV_PANEL_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(socket) = get(ENV_DOCKER_SOCKET) {
            cfg.docker_socket = socket;
        }
        Ok(cfg)
    }

    /// Address the HTTP server binds to: all IPv4 interfaces on [`PanelConfig::port`].
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = PanelConfig::from_lookup(lookup(&[])).unwrap();

        assert!(cfg.admin_token.is_default());
        assert!(cfg.admin_token.matches("changeme"));
        assert_eq!(cfg.container, "raft_rds");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.docker_socket, "/var/run/docker.sock");
        assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_overrides() {
        let cfg = PanelConfig::from_lookup(lookup(&[
            (ENV_ADMIN_TOKEN, "secret123"),
            (ENV_PANEL_PORT, "8080"),
            (ENV_DOCKER_SOCKET, "/run/user/1000/docker.sock"),
        ]))
        .unwrap();

        assert!(!cfg.admin_token.is_default());
        assert!(cfg.admin_token.matches("secret123"));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.docker_socket, "/run/user/1000/docker.sock");
        assert_eq!(cfg.container, "raft_rds");
    }

    #[test]
    fn empty_token_falls_back_to_default() {
        let cfg = PanelConfig::from_lookup(lookup(&[(ENV_ADMIN_TOKEN, "")])).unwrap();
        assert!(cfg.admin_token.is_default());
    }

    #[test]
    fn invalid_port_is_rejected() {
        for bad in ["http", "-1", "70000"] {
            let err = PanelConfig::from_lookup(lookup(&[(ENV_PANEL_PORT, bad)])).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidEnv { var: ENV_PANEL_PORT, .. }),
                "expected InvalidEnv for {bad:?}"
            );
        }
    }

    #[test]
    fn token_comparison_is_exact() {
        let token = AdminToken::new("secret123");
        assert!(token.matches("secret123"));
        assert!(!token.matches("Secret123"));
        assert!(!token.matches("secret123 "));
        assert!(!token.matches(""));
    }

    #[test]
    fn debug_output_hides_secret() {
        let cfg = PanelConfig {
            admin_token: AdminToken::new("hunter2"),
            ..Default::default()
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
