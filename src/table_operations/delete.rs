//! Delete table operation.

use aws_sdk_dynamodb::operation::delete_table::DeleteTableOutput;
use aws_sdk_dynamodb::Client;
use tracing::{debug, warn};

use crate::action::Action;
use crate::errors::sdk_error_text;

/// Delete a table.
///
/// Deleting a table that does not exist, or one in a state that forbids
/// deletion, comes back as a status-500 envelope.
pub async fn delete_table(client: &Client, table: &str) -> Action<DeleteTableOutput> {
    debug!(table = %table, "submitting DeleteTable");

    match client.delete_table().table_name(table).send().await {
        Ok(output) => Action::success(format!("Successfully deleted table : {table}"), output),
        Err(e) => {
            let text = sdk_error_text(&e);
            warn!(table = %table, error = %text, "DeleteTable rejected");
            Action::failure(format!("Unable to delete table : {text}"))
        }
    }
}
