// Lambda bootstrap for the photo label function

use aws_examples::core::clients::load_sdk_config;
use aws_examples::labels::handler;
use aws_examples::services::dynamodb::DynamoDbClient;
use aws_examples::services::rekognition::RekognitionClient;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    aws_examples::setup_logging();

    // Clients live for the whole execution environment, not per invocation
    let sdk_config = load_sdk_config(None).await;
    let rekognition = RekognitionClient::new(&sdk_config);
    let dynamodb = DynamoDbClient::new(&sdk_config);

    let rekognition = &rekognition;
    let dynamodb = &dynamodb;
    run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        handler(rekognition, dynamodb, event).await
    }))
    .await
}
