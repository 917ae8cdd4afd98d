//! Error types and SDK error-text extraction.
//!
//! Uses typed `SdkError` variant matching — no string parsing of debug
//! output. The envelope operations embed the extracted text in a failure
//! [`Action`](crate::Action); the helper operations surface it as
//! [`TableAdminError`].

use std::fmt::{Debug, Display};
use std::time::Duration;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Failures reported by the helper operations.
///
/// The create/update/delete envelope operations never return this directly;
/// they fold the same text into a status-500 [`Action`](crate::Action).
#[derive(Debug, Clone, Error)]
pub enum TableAdminError {
    /// The service rejected the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The service could not be reached at all.
    #[error("unable to reach DynamoDB: {0}")]
    Connection(String),

    /// The table did not become active within the allotted time.
    #[error("timed out after {waited:?} waiting for table `{table}` to become active")]
    ActivationTimeout { table: String, waited: Duration },
}

impl TableAdminError {
    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        TableAdminError::Rejected {
            status: crate::action::STATUS_FAILURE,
            message: message.into(),
        }
    }
}

/// Extract a human-readable error text from an `SdkError`.
///
/// Service errors report the service-provided message (falling back to the
/// error code, then the display form); dispatch and timeout variants produce
/// connection-oriented text.
pub(crate) fn sdk_error_text<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + Debug + Display,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(dispatch) => {
            if dispatch.is_timeout() {
                "connection to DynamoDB timed out".to_string()
            } else if dispatch.is_io() {
                "connection to DynamoDB failed (I/O error)".to_string()
            } else {
                "connection to DynamoDB failed".to_string()
            }
        }
        SdkError::TimeoutError(_) => "connection to DynamoDB timed out".to_string(),
        SdkError::ConstructionFailure(cause) => {
            format!("failed to build request: {:?}", cause)
        }
        SdkError::ResponseError(cause) => {
            format!("invalid response from DynamoDB: {:?}", cause)
        }
        _ => match err.as_service_error() {
            Some(service_err) => {
                let meta = ProvideErrorMetadata::meta(service_err);
                meta.message()
                    .map(str::to_string)
                    .or_else(|| meta.code().map(str::to_string))
                    .unwrap_or_else(|| service_err.to_string())
            }
            None => format!("unexpected DynamoDB error: {:?}", err),
        },
    }
}
