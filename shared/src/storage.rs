use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("object not found")]
    NotFound,
    #[error("access to object denied")]
    AccessDenied,
    #[error("storage request failed: {0}")]
    Request(String),
    #[error("failed to read object body: {0}")]
    Read(String),
}

/// A fetched object before its body has been drained. Content length
/// comes from the response metadata so callers can reject oversized
/// objects without buffering them.
pub struct FetchedObject {
    pub content_length: Option<i64>,
    pub body: ByteStream,
}

impl FetchedObject {
    /// Drain the body stream into a contiguous buffer.
    pub async fn into_bytes(self) -> Result<Vec<u8>, StorageError> {
        let data = self
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(data.into_bytes().to_vec())
    }
}

/// Blob-storage seam for the thumbnail pipeline; tests substitute an
/// in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    async fn fetch(&self, key: &str) -> Result<FetchedObject, StorageError>;
}

/// Production store backed by the shared S3 client.
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, key: &str) -> Result<FetchedObject, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(classify_get_object_error)?;

        Ok(FetchedObject {
            content_length: output.content_length(),
            body: output.body,
        })
    }
}

/// Classify S3 failures through the SDK's typed error rather than by
/// sniffing message text. Access denials surface as an unmodeled variant,
/// so those are matched on the error code.
fn classify_get_object_error(err: SdkError<GetObjectError>) -> StorageError {
    let service_err = err.into_service_error();
    if service_err.is_no_such_key() {
        return StorageError::NotFound;
    }
    match service_err.meta().code() {
        Some("AccessDenied") => StorageError::AccessDenied,
        _ => StorageError::Request(service_err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_into_bytes_drains_the_stream() {
        let object = FetchedObject {
            content_length: Some(5),
            body: ByteStream::from(b"hello".to_vec()),
        };
        assert_eq!(object.into_bytes().await.unwrap(), b"hello");
    }
}
