//! Wait for a table to become active.

use std::time::Duration;

use aws_sdk_dynamodb::types::TableStatus;
use aws_sdk_dynamodb::Client;
use tracing::debug;

use crate::errors::{sdk_error_text, TableAdminError};

/// Interval between DescribeTable polls.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll DescribeTable until the table reports `ACTIVE` or `timeout` elapses.
///
/// Polls at a fixed interval with no backoff. A DescribeTable rejection ends
/// the wait immediately.
pub async fn wait_for_table_active(
    client: &Client,
    table: &str,
    timeout: Duration,
) -> Result<(), TableAdminError> {
    let start = tokio::time::Instant::now();

    loop {
        let output = client
            .describe_table()
            .table_name(table)
            .send()
            .await
            .map_err(|e| TableAdminError::rejected(sdk_error_text(&e)))?;

        let status = output.table().and_then(|t| t.table_status().cloned());
        debug!(table = %table, status = ?status, "polled table status");

        if matches!(status, Some(TableStatus::Active)) {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(TableAdminError::ActivationTimeout {
                table: table.to_string(),
                waited: timeout,
            });
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::describe_table::DescribeTableOutput;
    use aws_sdk_dynamodb::types::TableDescription;
    use aws_smithy_mocks::{mock, mock_client};

    fn describe_output(status: TableStatus) -> DescribeTableOutput {
        DescribeTableOutput::builder()
            .table(
                TableDescription::builder()
                    .table_name("dynamo")
                    .table_status(status)
                    .build(),
            )
            .build()
    }

    #[tokio::test(start_paused = true)]
    async fn returns_once_the_table_is_active() {
        let rule = mock!(aws_sdk_dynamodb::Client::describe_table)
            .sequence()
            .output(|| describe_output(TableStatus::Creating))
            .output(|| describe_output(TableStatus::Active))
            .build();
        let client = mock_client!(aws_sdk_dynamodb, [&rule]);

        wait_for_table_active(&client, "dynamo", Duration::from_secs(30))
            .await
            .expect("table becomes active on the second poll");
        assert_eq!(rule.num_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_while_the_table_is_still_creating() {
        let rule = mock!(aws_sdk_dynamodb::Client::describe_table)
            .sequence()
            .output(|| describe_output(TableStatus::Creating))
            .repeatedly()
            .build();
        let client = mock_client!(aws_sdk_dynamodb, [&rule]);

        let err = wait_for_table_active(&client, "dynamo", Duration::from_secs(3))
            .await
            .expect_err("table never becomes active");
        assert!(matches!(err, TableAdminError::ActivationTimeout { .. }));
    }
}
