mod action;
pub use action::LifecycleAction;

mod config;
pub use config::{AdminToken, ENV_ADMIN_TOKEN, ENV_DOCKER_SOCKET, ENV_PANEL_PORT, PanelConfig};

mod constants;
pub use constants::{
    ADMIN_TOKEN_HEADER, DEFAULT_ADMIN_TOKEN, DEFAULT_DOCKER_SOCKET, DEFAULT_PORT,
    TARGET_CONTAINER,
};

mod error;
pub use error::{ModelError, ModelResult};

mod status;
pub use status::{ContainerStatus, StatusClass};
