use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::cognito::{CognitoClient, MAX_USER_POOLS, list_user_pools};
use clap::Parser;

/// List the Amazon Cognito user pools in the current region
#[derive(Debug, Parser)]
#[command(name = "cognito-list-user-pools")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let cognito = CognitoClient::new(&sdk_config);

    let pools = list_user_pools(&cognito, MAX_USER_POOLS).await?;
    println!("User pools:");
    for pool in &pools {
        println!("  {}  {}", pool.id, pool.name);
    }
    println!("Found {} user pools", pools.len());
    Ok(())
}
