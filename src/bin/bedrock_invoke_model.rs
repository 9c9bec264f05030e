use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::bedrock::{BedrockClient, invoke_model};
use clap::Parser;

/// Send a prompt to an Anthropic Claude model on Amazon Bedrock
#[derive(Debug, Parser)]
#[command(name = "bedrock-invoke-model")]
struct Cli {
    /// Model ID, for example anthropic.claude-3-haiku-20240307-v1:0
    model_id: String,
    /// Prompt text
    prompt: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let bedrock = BedrockClient::new(&sdk_config);

    let text = invoke_model(&bedrock, &cli.model_id, &cli.prompt).await?;
    println!("{text}");
    Ok(())
}
