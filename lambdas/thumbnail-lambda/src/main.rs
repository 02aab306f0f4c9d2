use aws_sdk_s3::Client as S3Client;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;
use thumbgen_shared::{AppState, Config};

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Configuration and the S3 client are established once at startup and
    // shared read-only across invocations.
    let config = Config::from_env()?;
    let aws_config = aws_config::load_from_env().await;
    let state = AppState::new(S3Client::new(&aws_config), config);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
