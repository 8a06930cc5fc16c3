use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use rdsp_model::LifecycleAction;
use rdsp_runtime::ContainerRuntime;

use crate::{auth::require_admin_token, error::ApiError, page::StatusPage, service::PanelService};

/// HTTP API service builder.
pub struct HttpApi<R> {
    service: Arc<PanelService<R>>,
}

impl<R> HttpApi<R>
where
    R: ContainerRuntime,
{
    pub fn new(service: Arc<PanelService<R>>) -> Self {
        Self { service }
    }

    /// Build the axum router.
    ///
    /// Routes:
    /// - GET /             - status page, no auth
    /// - POST /api/start   - start the container
    /// - POST /api/stop    - stop the container
    /// - POST /api/restart - restart the container
    ///
    /// The auth layer is attached with `route_layer`, so it only runs for
    /// matched action routes.
    pub fn router(self) -> Router {
        let actions: Router<Arc<PanelService<R>>> = Router::new()
            .route(LifecycleAction::Start.route(), post(start::<R>))
            .route(LifecycleAction::Stop.route(), post(stop::<R>))
            .route(LifecycleAction::Restart.route(), post(restart::<R>))
            .route_layer(middleware::from_fn_with_state(
                self.service.clone(),
                require_admin_token::<R>,
            ));

        Router::new()
            .route("/", get(index::<R>))
            .merge(actions)
            .with_state(self.service)
    }
}

/// GET /
async fn index<R>(State(service): State<Arc<PanelService<R>>>) -> StatusPage
where
    R: ContainerRuntime,
{
    StatusPage::new(&service.status().await)
}

/// POST /api/start
async fn start<R>(State(service): State<Arc<PanelService<R>>>) -> Result<String, ApiError>
where
    R: ContainerRuntime,
{
    service.perform(LifecycleAction::Start).await
}

/// POST /api/stop
async fn stop<R>(State(service): State<Arc<PanelService<R>>>) -> Result<String, ApiError>
where
    R: ContainerRuntime,
{
    service.perform(LifecycleAction::Stop).await
}

/// POST /api/restart
async fn restart<R>(State(service): State<Arc<PanelService<R>>>) -> Result<String, ApiError>
where
    R: ContainerRuntime,
{
    service.perform(LifecycleAction::Restart).await
}
