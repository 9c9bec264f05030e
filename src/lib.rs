/// AWS code examples - small, self-contained programs that each call one AWS service
/// operation through the AWS SDK for Rust.
///
/// Every example follows the same shape:
/// 1. Parse a few positional arguments (usage and exit code 1 on misuse)
/// 2. Build one region-scoped SDK client
/// 3. Issue one or two API calls
/// 4. Print the result and exit
///
/// # Layout
///
/// - `services`: one module per service, each with a client trait, the SDK-backed
///   client and the example functions
/// - `labels`: the photo label Lambda from the photo asset manager reference app
/// - `core`: configuration, SDK config loading and CLI helpers
///
/// # Example
///
/// ```no_run
/// use aws_examples::core::clients::load_sdk_config;
/// use aws_examples::services::sqs::{SqsClient, send_message};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     aws_examples::setup_logging();
///
///     let sdk_config = load_sdk_config(Some("us-west-2")).await;
///     let sqs = SqsClient::new(&sdk_config);
///     let message_id = send_message(
///         &sqs,
///         "https://sqs.us-west-2.amazonaws.com/123456789012/example",
///         "hello",
///     )
///     .await?;
///     println!("Sent message {message_id}");
///     Ok(())
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod labels;
pub mod services;

pub use errors::ExampleError;

/// Configure structured logging with JSON format.
///
/// Logs go to stderr so stdout carries only what the example prints. The level
/// defaults to `info` and follows `RUST_LOG` when set. In Lambda the JSON lines land
/// in `CloudWatch` Logs as-is. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// aws_examples::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
