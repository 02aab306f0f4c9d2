use lambda_http::{http::StatusCode, Body, Error, Request, RequestExt, Response};
use serde::Serialize;

use crate::error::ThumbnailError;
use crate::format::OutputFormat;
use crate::params;
use crate::storage::ObjectStore;
use crate::transform;
use crate::{auth, Config};

/// Objects larger than this are rejected before their body is buffered.
pub const MAX_FILE_SIZE: i64 = 20 * 1024 * 1024; // 20MB

const CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Run the full thumbnail pipeline for one request. Every failure is
/// translated to a structured JSON error response here; nothing
/// propagates past this boundary.
pub async fn handle_request<S: ObjectStore>(
    event: Request,
    store: &S,
    config: &Config,
) -> Result<Response<Body>, Error> {
    match generate(&event, store, config).await {
        Ok((format, bytes)) => {
            // Binary bodies are base64-encoded by the runtime on the way out.
            Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", format.content_type())
                .header("Cache-Control", CACHE_CONTROL)
                .body(bytes.into())
                .map_err(Box::new)?)
        }
        Err(err) => {
            tracing::error!("Error processing thumbnail request: {:?}", err);
            error_response(&err)
        }
    }
}

async fn generate<S: ObjectStore>(
    event: &Request,
    store: &S,
    config: &Config,
) -> Result<(OutputFormat, Vec<u8>), ThumbnailError> {
    if !auth::verify_origin_secret(event.headers(), &config.secret) {
        return Err(ThumbnailError::Forbidden);
    }

    let key = params::object_key(event.uri().path())?;

    let query = event.query_string_parameters();
    let spec = params::parse_dimensions(query.first("width"), query.first("height"))?;

    let object = store.fetch(key).await?;

    // Checked against the response metadata, before the body is drained.
    if object.content_length.unwrap_or(0) > MAX_FILE_SIZE {
        return Err(ThumbnailError::PayloadTooLarge);
    }

    let bytes = object.into_bytes().await?;

    let source = transform::decode(&bytes).map_err(ThumbnailError::Decode)?;
    let format = OutputFormat::resolve(query.first("format"), source.format);

    let resized = transform::resize(&source.image, spec.width, spec.height);
    let encoded = transform::encode(&resized, source.has_alpha, format)
        .map_err(|e| ThumbnailError::Internal(Box::new(e)))?;

    Ok((format, encoded))
}

fn error_response(err: &ThumbnailError) -> Result<Response<Body>, Error> {
    let body = ErrorBody {
        error: err.to_string(),
    };
    Ok(Response::builder()
        .status(err.status_code())
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&body)?.into())
        .map_err(Box::new)?)
}
