use std::sync::Arc;

use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{
    error::IngestError,
    model::{HandlerResponse, ObjectCreatedEvent, ObjectRef, ProcessedRecord},
    service,
};

/// Processes one object-created notification: read the object, uppercase its
/// text, and persist the result under the object key.
///
/// The lambda is configured to deliver one notification per invocation; only
/// the first record of the payload is consumed.
#[tracing::instrument(skip_all)]
pub async fn handler(
    db: Arc<service::db::DB>,
    s3_client: Arc<service::s3::S3>,
    event: LambdaEvent<ObjectCreatedEvent>,
) -> Result<HandlerResponse, Error> {
    tracing::trace!("processing event");

    let object_ref = ObjectRef::from_event(&event.payload)?;

    tracing::trace!(bucket=%object_ref.bucket, key=%object_ref.key, "resolved object reference");

    let bytes = s3_client
        .get_object_bytes(&object_ref.bucket, &object_ref.key)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, key=%object_ref.key, "unable to read object from storage");
            IngestError::StorageRead(e)
        })?;

    let content = String::from_utf8(bytes).map_err(IngestError::Decode)?;

    let record = ProcessedRecord {
        id: object_ref.key.clone(),
        data: transform(&content),
    };

    db.put_record(&record).await.map_err(|e| {
        tracing::error!(error=?e, id=%record.id, "unable to write processed record");
        IngestError::StorageWrite(e)
    })?;

    tracing::info!(id=%record.id, "stored processed record");

    Ok(HandlerResponse::success())
}

/// Uppercases the entire object content. Total over any input string and
/// idempotent.
fn transform(content: &str) -> String {
    content.to_uppercase()
}
