use lambda_http::{Body, Error, Request, Response};
use std::sync::Arc;
use thumbgen_shared::{thumbnail, AppState};

/// Lambda handler - every request goes through the thumbnail pipeline.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    tracing::info!("Thumbnail request - Path: {}", event.uri().path());
    thumbnail::handle_request(event, &state.store, &state.config).await
}
