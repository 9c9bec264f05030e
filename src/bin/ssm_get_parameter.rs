use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::ssm::{SsmClient, get_parameter};
use clap::Parser;

/// Read a value from Systems Manager Parameter Store
#[derive(Debug, Parser)]
#[command(name = "ssm-get-parameter")]
struct Cli {
    /// Parameter name
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let ssm = SsmClient::new(&sdk_config);

    match get_parameter(&ssm, &cli.name).await? {
        Some(param) => println!("{} = {} (version {})", param.name, param.value, param.version),
        None => println!("Parameter {} not found", cli.name),
    }
    Ok(())
}
