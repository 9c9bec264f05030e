use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::sqs::{SqsClient, list_queues};
use clap::Parser;

/// List the Amazon SQS queues in the current region
#[derive(Debug, Parser)]
#[command(name = "sqs-list-queues")]
struct Cli {
    /// Only list queues whose name starts with this prefix
    prefix: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let sqs = SqsClient::new(&sdk_config);

    let queue_urls = list_queues(&sqs, cli.prefix.as_deref()).await?;
    if queue_urls.is_empty() {
        println!("No queues found");
    }
    for url in &queue_urls {
        println!("{url}");
    }
    Ok(())
}
