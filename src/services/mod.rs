//! One module per AWS service. Each module pairs a client trait (so tests can swap
//! in a mock) with the real SDK-backed client and the example functions themselves.

pub mod apigateway;
pub mod autoscaling;
pub mod bedrock;
pub mod cognito;
pub mod dynamodb;
pub mod kendra;
pub mod lambda;
pub mod rekognition;
pub mod s3;
pub mod sqs;
pub mod ssm;

use crate::errors::ExampleError;

/// Reject empty or whitespace-only arguments before any network call is made.
pub(crate) fn require(what: &str, value: &str) -> Result<(), ExampleError> {
    if value.trim().is_empty() {
        return Err(ExampleError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}
