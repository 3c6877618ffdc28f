use anyhow::Context;
use aws_sdk_dynamodb::{Client, types::AttributeValue};

use crate::model::ProcessedRecord;

/// Puts the record into the table. DynamoDB overwrites an existing item with
/// the same id, so rewrites of a key are last-write-wins. Items over the
/// per-item size limit are rejected by the service and surface here as a
/// write error.
#[tracing::instrument(skip(client, record))]
pub async fn put_record(
    client: &Client,
    table: &str,
    record: &ProcessedRecord,
) -> anyhow::Result<()> {
    client
        .put_item()
        .table_name(table)
        .item("id", AttributeValue::S(record.id.clone()))
        .item("data", AttributeValue::S(record.data.clone()))
        .send()
        .await
        .context(format!(
            "could not put record {} into table {table}",
            record.id
        ))?;

    Ok(())
}
