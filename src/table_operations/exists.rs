//! Table existence check.

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use crate::errors::{sdk_error_text, TableAdminError};

/// Check whether a table exists.
///
/// A `ResourceNotFoundException` means the table is absent; any other
/// rejection is surfaced as an error rather than treated as absence.
pub async fn table_exists(client: &Client, table: &str) -> Result<bool, TableAdminError> {
    debug!(table = %table, "submitting DescribeTable");

    match client.describe_table().table_name(table).send().await {
        Ok(_) => Ok(true),
        Err(e) => {
            if matches!(
                e.as_service_error(),
                Some(DescribeTableError::ResourceNotFoundException(_))
            ) {
                Ok(false)
            } else {
                Err(TableAdminError::rejected(sdk_error_text(&e)))
            }
        }
    }
}
