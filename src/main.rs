#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use object_ingest_handler::{
    config::Config, entrypoint::Entrypoint, handler::handler, model::ObjectCreatedEvent, service,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Entrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region("us-east-1")
        .load()
        .await;

    let s3_client = Arc::new(service::s3::S3::new(aws_sdk_s3::Client::new(&aws_config)));
    tracing::trace!("initialized s3 client");

    let db_client = Arc::new(service::db::DB::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.processed_data_table.as_str(),
    ));
    tracing::trace!("initialized db client");

    let func = service_fn(move |event: LambdaEvent<ObjectCreatedEvent>| {
        let db = db_client.clone();
        let s3_client = s3_client.clone();

        async move { handler(db, s3_client, event).await }
    });

    run(func).await
}
