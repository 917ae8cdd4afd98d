//! Create table operation.

use aws_sdk_dynamodb::error::BuildError;
use aws_sdk_dynamodb::operation::create_table::builders::CreateTableFluentBuilder;
use aws_sdk_dynamodb::operation::create_table::CreateTableOutput;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use tracing::{debug, warn};

use crate::action::Action;
use crate::errors::sdk_error_text;
use crate::table_operations::{ProvisionedCapacity, KEY_ATTRIBUTE};

/// Create a table with a single `Name` (string) hash key and the given
/// provisioned throughput.
///
/// The request is submitted as-is; the service validates the name and the
/// capacities. Any rejection (table already exists, invalid throughput)
/// comes back as a status-500 envelope carrying the service error text.
pub async fn create_table(
    client: &Client,
    table: &str,
    capacity: ProvisionedCapacity,
) -> Action<CreateTableOutput> {
    let request = match build_request(client, table, capacity) {
        Ok(request) => request,
        Err(e) => return Action::failure(format!("Unable to create table : {e}")),
    };

    debug!(
        table = %table,
        read = capacity.read_capacity_units,
        write = capacity.write_capacity_units,
        "submitting CreateTable"
    );

    match request.send().await {
        Ok(output) => Action::success(format!("Successfully created table : {table}"), output),
        Err(e) => {
            let text = sdk_error_text(&e);
            warn!(table = %table, error = %text, "CreateTable rejected");
            Action::failure(format!("Unable to create table : {text}"))
        }
    }
}

fn build_request(
    client: &Client,
    table: &str,
    capacity: ProvisionedCapacity,
) -> Result<CreateTableFluentBuilder, BuildError> {
    Ok(client
        .create_table()
        .table_name(table)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(KEY_ATTRIBUTE)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(KEY_ATTRIBUTE)
                .key_type(KeyType::Hash)
                .build()?,
        )
        .provisioned_throughput(capacity.to_throughput()?))
}
