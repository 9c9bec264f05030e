use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::kendra::{KendraClient, create_index, wait_for_index};
use clap::Parser;

/// Create an Amazon Kendra index and wait for it to become active
#[derive(Debug, Parser)]
#[command(name = "kendra-create-index")]
struct Cli {
    /// Name of the new index
    name: String,
    /// ARN of the IAM role Kendra assumes to write CloudWatch logs
    role_arn: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let kendra = KendraClient::new(&sdk_config);

    let index_id = create_index(&kendra, &cli.name, &cli.role_arn).await?;
    println!("Creating index {index_id}, this can take up to 30 minutes");
    let state = wait_for_index(&kendra, &index_id, config.poll).await?;
    println!("Index {index_id} is {state:?}");
    Ok(())
}
