use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::ssm::{SsmClient, put_parameter};
use clap::Parser;

/// Store a value in Systems Manager Parameter Store
#[derive(Debug, Parser)]
#[command(name = "ssm-put-parameter")]
struct Cli {
    /// Parameter name, for example /app/db/host
    name: String,
    /// Value to store
    value: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let ssm = SsmClient::new(&sdk_config);

    let version = put_parameter(&ssm, &cli.name, &cli.value).await?;
    println!("Stored {} (version {version})", cli.name);
    Ok(())
}
