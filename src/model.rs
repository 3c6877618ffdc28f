use lambda_runtime::tracing;
use serde::{Deserialize, Serialize};

use crate::error::IngestError;

/// Notification payload delivered when an object lands in the bucket.
///
/// Mirrors the S3 trigger envelope. Every leaf field is optional at the
/// deserialization layer; validation happens when resolving an [ObjectRef].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectCreatedEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<ObjectCreatedRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectCreatedRecord {
    #[serde(default)]
    pub s3: StorageEntity,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageEntity {
    #[serde(default)]
    pub bucket: BucketRef,
    #[serde(default)]
    pub object: ObjectKeyRef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BucketRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectKeyRef {
    #[serde(default)]
    pub key: Option<String>,
}

/// A validated bucket/key pair resolved from a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl ObjectRef {
    /// Resolves the bucket name and object key from the first record of the
    /// event. Object keys arrive percent-encoded in the notification and are
    /// decoded here.
    #[tracing::instrument(skip(event))]
    pub fn from_event(event: &ObjectCreatedEvent) -> Result<Self, IngestError> {
        let record = event.records.first().ok_or_else(|| {
            IngestError::MalformedInput("notification contains no records".to_string())
        })?;

        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| IngestError::MalformedInput("missing bucket name".to_string()))?;

        let key = record
            .s3
            .object
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| IngestError::MalformedInput("missing object key".to_string()))?;

        let key = urlencoding::decode(key)
            .map_err(|_| IngestError::MalformedInput(format!("unable to decode key {key}")))?;

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.into_owned(),
        })
    }
}

/// The record persisted for one processed object. A rewrite with the same id
/// overwrites the prior record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedRecord {
    pub id: String,
    pub data: String,
}

/// Success envelope returned to the invocation platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: "Data processed successfully!".to_string(),
        }
    }
}
