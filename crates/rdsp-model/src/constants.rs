//! Compiled-in values of the panel.

/// Name of the single container this panel manages.
pub const TARGET_CONTAINER: &str = "raft_rds";

/// Request header carrying the admin token on action routes.
///
/// Lowercase so it can be used directly as an `http::HeaderName`.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Token used when `ADMIN_TOKEN` is unset. Running with it is a deployment
/// mistake and is reported at startup.
pub const DEFAULT_ADMIN_TOKEN: &str = "changeme";

/// Default TCP port of the HTTP server.
pub const DEFAULT_PORT: u16 = 3000;

/// Default Unix socket of the Docker daemon.
pub const DEFAULT_DOCKER_SOCKET: &str = "/var/run/docker.sock";
