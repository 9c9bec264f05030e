use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::labels::handler::{MAX_LABELS, MIN_CONFIDENCE};
use aws_examples::services::rekognition::{RekognitionClient, detect_labels};
use clap::Parser;

/// Detect labels in an image stored in Amazon S3
#[derive(Debug, Parser)]
#[command(name = "rekognition-detect-labels")]
struct Cli {
    /// Bucket holding the image
    bucket: String,
    /// Object key of the image
    key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let rekognition = RekognitionClient::new(&sdk_config);

    let labels = detect_labels(&rekognition, &cli.bucket, &cli.key, MAX_LABELS, MIN_CONFIDENCE).await?;
    for label in &labels {
        println!("{:<24} {:.1}%", label.name, label.confidence);
    }
    Ok(())
}
