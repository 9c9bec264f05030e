use aws_sdk_sqs::error::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use thiserror::Error;

/// Error code the AWS services use when the caller lacks a permission.
pub const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Failed to interact with AWS services: {0}")]
    Aws(String),

    #[error("Gave up waiting after {attempts} attempts: {what}")]
    Timeout { what: String, attempts: u32 },

    #[error("Failed to (de)serialize payload: {0}")]
    Serialization(String),
}

impl ExampleError {
    /// A friendlier message for permission failures, `None` for everything else.
    #[must_use]
    pub fn permission_hint(&self) -> Option<String> {
        match self {
            ExampleError::AccessDenied(msg) => Some(format!(
                "The credentials in use are not allowed to perform this call ({msg}). \
                 Check the IAM policy attached to your role, and for Bedrock make sure \
                 access to the model is enabled in the console."
            )),
            _ => None,
        }
    }
}

// Generic implementation for AWS SDK errors. Every service crate re-exports the same
// `SdkError`, so this covers all of them.
impl<E, R> From<SdkError<E, R>> for ExampleError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(error: SdkError<E, R>) -> Self {
        match (error.code(), error.message()) {
            (Some(ACCESS_DENIED_CODE), message) => {
                ExampleError::AccessDenied(message.unwrap_or("no message").to_string())
            }
            (Some(code), Some(message)) => ExampleError::Aws(format!("{code}: {message}")),
            // Dispatch, timeout and construction failures carry no error code
            _ => ExampleError::Aws(DisplayErrorContext(&error).to_string()),
        }
    }
}

impl From<serde_json::Error> for ExampleError {
    fn from(error: serde_json::Error) -> Self {
        ExampleError::Serialization(error.to_string())
    }
}
