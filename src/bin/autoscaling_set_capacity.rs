use aws_examples::core::cli::{parse_capacity, parse_or_exit};
use aws_examples::core::clients::load_sdk_config;
use aws_examples::core::config::ExampleConfig;
use aws_examples::services::autoscaling::{
    AutoScalingClient, set_desired_capacity, wait_for_capacity,
};
use clap::Parser;

/// Set the desired capacity of an Auto Scaling group and wait for it to settle
#[derive(Debug, Parser)]
#[command(name = "autoscaling-set-capacity")]
struct Cli {
    /// Name of the Auto Scaling group
    group_name: String,
    /// New desired number of instances
    #[arg(value_parser = parse_capacity, allow_negative_numbers = true)]
    capacity: i32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli: Cli = parse_or_exit();
    aws_examples::setup_logging();

    let config = ExampleConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let autoscaling = AutoScalingClient::new(&sdk_config);

    set_desired_capacity(&autoscaling, &cli.group_name, cli.capacity).await?;
    let capacity = wait_for_capacity(&autoscaling, &cli.group_name, config.poll).await?;
    println!(
        "Group {} has {} of {} instances in service",
        cli.group_name, capacity.in_service, capacity.desired
    );
    Ok(())
}
