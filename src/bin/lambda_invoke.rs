use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::lambda::{LambdaClient, invoke_function};
use clap::Parser;

/// Invoke an AWS Lambda function with a JSON payload
#[derive(Debug, Parser)]
#[command(name = "lambda-invoke")]
struct Cli {
    /// Function name or ARN
    function_name: String,
    /// JSON payload, for example '{"name": "Ana"}'
    payload: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let lambda = LambdaClient::new(&sdk_config);

    let invocation = invoke_function(&lambda, &cli.function_name, &cli.payload).await?;
    println!("Status {}: {}", invocation.status_code, invocation.payload);
    Ok(())
}
