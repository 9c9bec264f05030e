//! Shared SDK configuration loading.
//!
//! Every example builds exactly one service client from the `SdkConfig` returned
//! here. Credentials come from the standard provider chain, and `AWS_ENDPOINT_URL`
//! is honored by `aws-config` for LocalStack-style endpoints.

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Region used when neither the caller nor the environment names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Load a region-scoped SDK configuration.
///
/// The explicit `region` wins, then the default provider chain (env, profile, IMDS),
/// then [`DEFAULT_REGION`].
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(|r| Region::new(r.to_string())))
        .or_default_provider()
        .or_else(Region::new(DEFAULT_REGION));

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    debug!(region = ?config.region(), "Loaded AWS SDK config");
    config
}
