use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::sqs::{MAX_RECEIVE_BATCH, SqsClient, receive_messages};
use clap::Parser;

/// Receive messages from an Amazon SQS queue
#[derive(Debug, Parser)]
#[command(name = "sqs-receive-messages")]
struct Cli {
    /// URL of the queue
    queue_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let sqs = SqsClient::new(&sdk_config);

    let messages = receive_messages(&sqs, &cli.queue_url, MAX_RECEIVE_BATCH).await?;
    if messages.is_empty() {
        println!("No messages available");
    }
    for message in &messages {
        println!("{}: {}", message.message_id, message.body);
    }
    Ok(())
}
