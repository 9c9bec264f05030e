use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::apigateway::{ApiGatewayClient, create_deployment};
use clap::Parser;

/// Deploy an API Gateway REST API to a stage
#[derive(Debug, Parser)]
#[command(name = "apigateway-create-deployment")]
struct Cli {
    /// ID of the REST API
    rest_api_id: String,
    /// Stage to deploy to, created if it does not exist
    stage_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let apigw = ApiGatewayClient::new(&sdk_config);

    let deployment = create_deployment(&apigw, &cli.rest_api_id, &cli.stage_name).await?;
    println!(
        "Created deployment {} on stage {}",
        deployment.id, cli.stage_name
    );
    Ok(())
}
