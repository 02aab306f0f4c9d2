use lambda_http::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Header CloudFront attaches so the function only serves traffic that
/// came through the distribution.
pub const ORIGIN_VERIFY_HEADER: &str = "x-origin-verify";

/// Check the shared-secret header against the configured value.
/// Missing header counts as a mismatch. Comparison is constant-time.
pub fn verify_origin_secret(headers: &HeaderMap, secret: &str) -> bool {
    headers
        .get(ORIGIN_VERIFY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|presented| bool::from(presented.as_bytes().ct_eq(secret.as_bytes())))
        .unwrap_or(false)
}
