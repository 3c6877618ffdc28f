mod put_record;

use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(not(test))]
pub use DBClient as DB;
#[cfg(test)]
pub use MockDBClient as DB;

use crate::model::ProcessedRecord;

#[derive(Clone, Debug)]
pub struct DBClient {
    /// Inner DynamoDB client
    inner: aws_sdk_dynamodb::Client,
    /// Table that receives processed records
    table: String,
}

#[cfg_attr(test, automock)]
impl DBClient {
    pub fn new(inner: aws_sdk_dynamodb::Client, table: &str) -> Self {
        Self {
            inner,
            table: table.to_string(),
        }
    }

    /// Writes the record to the table, overwriting any record with the same id.
    #[tracing::instrument(skip(self, record))]
    pub async fn put_record(&self, record: &ProcessedRecord) -> anyhow::Result<()> {
        put_record::put_record(&self.inner, &self.table, record).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use crate::{model::ProcessedRecord, service::db::DB};

    #[tokio::test]
    async fn test_put_record() {
        let mut mock = DB::default();
        mock.expect_put_record()
            .with(eq(ProcessedRecord {
                id: "notes.txt".to_string(),
                data: "HELLO WORLD".to_string(),
            }))
            .return_once(|_| Ok(()));

        let result = mock
            .put_record(&ProcessedRecord {
                id: "notes.txt".to_string(),
                data: "HELLO WORLD".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }
}
