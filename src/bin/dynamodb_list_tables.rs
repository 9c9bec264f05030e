use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::dynamodb::{DynamoDbClient, list_tables};
use clap::Parser;

/// List the Amazon DynamoDB tables in the current region
#[derive(Debug, Parser)]
#[command(name = "dynamodb-list-tables")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let dynamodb = DynamoDbClient::new(&sdk_config);

    let tables = list_tables(&dynamodb).await?;
    for table in &tables {
        println!("{table}");
    }
    println!("Found {} tables", tables.len());
    Ok(())
}
