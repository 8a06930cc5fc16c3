use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use rdsp_model::ContainerStatus;
use tracing::error;

/// Status page served on `GET /`.
///
/// The pill class follows [`ContainerStatus::class`]; askama escapes the status text.
#[derive(Template)]
#[template(path = "index.html")]
pub struct StatusPage {
    status: String,
    status_class: &'static str,
}

impl StatusPage {
    pub fn new(status: &ContainerStatus) -> Self {
        Self {
            status: status.as_str().to_string(),
            status_class: status.class().css_class(),
        }
    }
}

impl IntoResponse for StatusPage {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                error!(error = %err, "failed to render status page");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
