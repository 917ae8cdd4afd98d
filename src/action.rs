//! The result envelope returned by every administrative operation.

use crate::errors::TableAdminError;

/// Outcome code for an accepted operation.
pub const STATUS_SUCCESS: u16 = 200;

/// Outcome code for a rejected operation.
///
/// The codes mirror the conventional 200/500 pair but are opaque outcome
/// markers, not HTTP semantics; no HTTP transport is involved.
pub const STATUS_FAILURE: u16 = 500;

/// Uniform result of a table administration call.
///
/// Carries an outcome code, a human-readable message, and the raw SDK output
/// when the service accepted the request. Exactly one of the success payload
/// and the failure message text is meaningful: `result()` is `Some` if and
/// only if `status()` is [`STATUS_SUCCESS`]. Constructed once per call and
/// never mutated.
#[derive(Debug, Clone)]
pub struct Action<T> {
    status: u16,
    message: String,
    result: Option<T>,
}

impl<T> Action<T> {
    /// Envelope for an accepted request.
    pub(crate) fn success(message: impl Into<String>, result: T) -> Self {
        Action {
            status: STATUS_SUCCESS,
            message: message.into(),
            result: Some(result),
        }
    }

    /// Envelope for a rejected request. Carries no payload.
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Action {
            status: STATUS_FAILURE,
            message: message.into(),
            result: None,
        }
    }

    /// The outcome code ([`STATUS_SUCCESS`] or [`STATUS_FAILURE`]).
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Message describing the outcome, including the service error text on
    /// failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The raw service output, present only on success.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Convert the envelope into a `Result`, for callers preferring `?`-style
    /// control flow over status inspection.
    pub fn into_result(self) -> Result<T, TableAdminError> {
        match self.result {
            Some(output) => Ok(output),
            None => Err(TableAdminError::Rejected {
                status: self.status,
                message: self.message,
            }),
        }
    }
}
