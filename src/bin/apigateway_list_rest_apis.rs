use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::apigateway::{ApiGatewayClient, format_rest_api, list_rest_apis};
use clap::Parser;

/// List the API Gateway REST APIs in the current region
#[derive(Debug, Parser)]
#[command(name = "apigateway-list-rest-apis")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let apigw = ApiGatewayClient::new(&sdk_config);

    for api in list_rest_apis(&apigw).await? {
        println!("{}", format_rest_api(&api));
    }
    Ok(())
}
