use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::sqs::{SqsClient, send_message};
use clap::Parser;

/// Send a message to an Amazon SQS queue
#[derive(Debug, Parser)]
#[command(name = "sqs-send-message")]
struct Cli {
    /// URL of the queue
    queue_url: String,
    /// Message body to send
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let sqs = SqsClient::new(&sdk_config);

    let message_id = send_message(&sqs, &cli.queue_url, &cli.message).await?;
    println!("Sent message {message_id}");
    Ok(())
}
