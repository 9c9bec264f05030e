use std::error::Error;

use aws_examples::errors::{ACCESS_DENIED_CODE, ExampleError};
use aws_sdk_ssm::error::SdkError;
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use aws_smithy_types::error::ErrorMetadata;

fn service_error(code: &str, message: &str) -> SdkError<GetParameterError, ()> {
    let meta = ErrorMetadata::builder().code(code).message(message).build();
    SdkError::service_error(GetParameterError::generic(meta), ())
}

#[test]
fn test_example_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = ExampleError::InvalidInput("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_example_error_display() {
    let error = ExampleError::Aws("throttled".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: throttled"
    );

    let error = ExampleError::Timeout {
        what: "index idx-1 to become active".to_string(),
        attempts: 60,
    };
    assert_eq!(
        format!("{error}"),
        "Gave up waiting after 60 attempts: index idx-1 to become active"
    );
}

#[test]
fn test_access_denied_service_error_is_recognized() {
    let error: ExampleError = service_error(ACCESS_DENIED_CODE, "not authorized").into();

    match &error {
        ExampleError::AccessDenied(msg) => assert_eq!(msg, "not authorized"),
        other => panic!("Unexpected error type: {other}"),
    }
    assert!(error.permission_hint().is_some());
}

#[test]
fn test_other_service_errors_keep_code_and_message() {
    let error: ExampleError = service_error("ThrottlingException", "slow down").into();

    match &error {
        ExampleError::Aws(msg) => {
            assert!(msg.contains("ThrottlingException"), "{msg}");
            assert!(msg.contains("slow down"), "{msg}");
        }
        other => panic!("Unexpected error type: {other}"),
    }
    assert!(error.permission_hint().is_none());
}

#[test]
fn test_construction_failure_maps_to_aws_error() {
    let sdk_error: SdkError<GetParameterError, ()> =
        SdkError::construction_failure("missing region");
    let error = ExampleError::from(sdk_error);

    assert!(matches!(error, ExampleError::Aws(_)));
}

#[test]
fn test_serde_error_conversion() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: ExampleError = parse_error.into();

    assert!(matches!(error, ExampleError::Serialization(_)));
}
