use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use rdsp_model::ADMIN_TOKEN_HEADER;
use rdsp_runtime::ContainerRuntime;
use tracing::warn;

use crate::{error::ApiError, service::PanelService};

/// Rejects the request with `401` unless `X-Admin-Token` carries the admin secret.
///
/// Runs before the action handler, so a rejected request never reaches the runtime.
/// Non-UTF-8 header values count as a wrong token.
pub(crate) async fn require_admin_token<R>(
    State(service): State<Arc<PanelService<R>>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError>
where
    R: ContainerRuntime,
{
    let token = request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(err) = service.authorize(token) {
        warn!(
            path = %request.uri().path(),
            token_present = token.is_some(),
            "rejected action request"
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}
