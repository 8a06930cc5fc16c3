//! HTTP surface of the RDS panel.
//!
//! - `GET /` renders the status page.
//! - `POST /api/{start,stop,restart}` run a lifecycle action, gated by the
//!   `X-Admin-Token` header.

mod auth;

mod error;
pub use error::ApiError;

mod http;
pub use http::HttpApi;

mod page;
pub use page::StatusPage;

mod service;
pub use service::PanelService;
