use thiserror::Error;

/// Failure taxonomy for a single invocation.
///
/// No variant is recovered or retried locally; every error aborts the
/// invocation and is surfaced to the trigger platform, which owns any retry
/// policy.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The notification is missing required fields
    #[error("malformed notification: {0}")]
    MalformedInput(String),

    /// The object could not be read from the bucket
    #[error("unable to read object from storage")]
    StorageRead(#[source] anyhow::Error),

    /// The object bytes are not valid UTF-8 text
    #[error("object content is not valid utf-8")]
    Decode(#[source] std::string::FromUtf8Error),

    /// The record could not be written to the table
    #[error("unable to write record to the processed data table")]
    StorageWrite(#[source] anyhow::Error),
}
