use aws_examples::core::cli::parse_or_exit;
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::s3::{S3Client, list_objects};
use clap::Parser;

/// List every object in an Amazon S3 bucket
#[derive(Debug, Parser)]
#[command(name = "s3-list-objects")]
struct Cli {
    /// Bucket name
    bucket: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let s3 = S3Client::new(&sdk_config);

    let objects = list_objects(&s3, &cli.bucket).await?;
    for object in &objects {
        println!("{:>12}  {}", object.size, object.key);
    }
    println!("{} objects in {}", objects.len(), cli.bucket);
    Ok(())
}
