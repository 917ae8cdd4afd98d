//! Update table throughput operation.

use aws_sdk_dynamodb::operation::update_table::UpdateTableOutput;
use aws_sdk_dynamodb::Client;
use tracing::{debug, warn};

use crate::action::Action;
use crate::errors::sdk_error_text;
use crate::table_operations::ProvisionedCapacity;

/// Update an existing table's provisioned throughput.
///
/// The service rejects the call when the table does not exist or when the
/// new throughput matches the current one; both come back as a status-500
/// envelope.
pub async fn update_table(
    client: &Client,
    table: &str,
    capacity: ProvisionedCapacity,
) -> Action<UpdateTableOutput> {
    let throughput = match capacity.to_throughput() {
        Ok(throughput) => throughput,
        Err(e) => return Action::failure(format!("Unable to update table : {e}")),
    };

    debug!(
        table = %table,
        read = capacity.read_capacity_units,
        write = capacity.write_capacity_units,
        "submitting UpdateTable"
    );

    let result = client
        .update_table()
        .table_name(table)
        .provisioned_throughput(throughput)
        .send()
        .await;

    match result {
        Ok(output) => Action::success(format!("Successfully updated table : {table}"), output),
        Err(e) => {
            let text = sdk_error_text(&e);
            warn!(table = %table, error = %text, "UpdateTable rejected");
            Action::failure(format!("Unable to update table : {text}"))
        }
    }
}
