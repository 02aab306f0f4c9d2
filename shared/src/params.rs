use crate::error::ThumbnailError;

pub const MAX_DIMENSION: i64 = 4096;
pub const DEFAULT_DIMENSION: i64 = 200;

/// Target bounding box for the resize, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSpec {
    pub width: u32,
    pub height: u32,
}

/// Recover the S3 object key from the request path by stripping the
/// leading slash. An empty key is a client error.
pub fn object_key(path: &str) -> Result<&str, ThumbnailError> {
    let key = path.strip_prefix('/').unwrap_or(path);
    if key.is_empty() {
        return Err(ThumbnailError::MissingPath);
    }
    Ok(key)
}

/// Parse `width`/`height` query parameters, defaulting to 200 when absent.
/// Both are parsed before range-checking so a non-numeric value always
/// reports as such. Parsing is signed so `-5` hits the range message
/// rather than the parse one.
pub fn parse_dimensions(
    width: Option<&str>,
    height: Option<&str>,
) -> Result<ResizeSpec, ThumbnailError> {
    let width = parse_dimension(width)?;
    let height = parse_dimension(height)?;

    if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
        return Err(ThumbnailError::DimensionOutOfRange);
    }

    Ok(ResizeSpec {
        width: width as u32,
        height: height as u32,
    })
}

fn parse_dimension(raw: Option<&str>) -> Result<i64, ThumbnailError> {
    match raw {
        None => Ok(DEFAULT_DIMENSION),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| ThumbnailError::InvalidDimension),
    }
}
