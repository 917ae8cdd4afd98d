//! DynamoDB table administration client.
//!
//! Provides [`TableAdmin`], a blocking client over the async SDK core. The
//! endpoint is selected explicitly at construction:
//! - [`Environment::Aws`] - managed service, default credential and region
//!   resolution (region override allowed)
//! - [`Environment::Local`] - a local emulator, fixed placeholder region

use std::sync::Arc;
use std::time::Duration;

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::operation::create_table::CreateTableOutput;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableOutput;
use aws_sdk_dynamodb::operation::update_table::UpdateTableOutput;
use aws_sdk_dynamodb::Client;
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::action::Action;
use crate::env::{Environment, LOCAL_ENDPOINT, LOCAL_REGION};
use crate::errors::{sdk_error_text, TableAdminError};
use crate::table_operations::{
    create_table, delete_table, table_exists, update_table, wait_for_table_active,
    ProvisionedCapacity,
};

/// Fallback region when neither config nor ambient resolution yields one.
const DEFAULT_REGION: &str = "us-east-1";

/// Global shared Tokio runtime driving the blocking surface.
static RUNTIME: Lazy<Arc<Runtime>> =
    Lazy::new(|| Arc::new(Runtime::new().expect("Failed to create global Tokio runtime")));

/// Construction-time endpoint selection.
///
/// Replaces call-time inspection of process-wide state: the environment is
/// fixed when the client is built. [`Environment::detect`] remains available
/// for callers that want the flag-driven behavior.
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    /// Where administrative calls are routed.
    pub environment: Environment,
    /// Region override for the managed service. Ignored in local mode.
    pub region: Option<String>,
    /// Endpoint override, e.g. an emulator on a non-default port.
    pub endpoint_url: Option<String>,
}

/// Blocking table administration client.
///
/// Each operation is a single round-trip; create/update/delete normalize
/// every outcome into an [`Action`] envelope and never return `Err`.
/// Correctness of concurrent calls against the same table name is delegated
/// entirely to the service.
pub struct TableAdmin {
    client: Client,
    runtime: Arc<Runtime>,
    environment: Environment,
}

impl TableAdmin {
    /// Build a client for the configured environment.
    pub fn new(config: AdminConfig) -> Self {
        let runtime = RUNTIME.clone();
        let client = runtime.block_on(build_client(&config));
        info!(environment = ?config.environment, "DynamoDB admin client ready");

        TableAdmin {
            client,
            runtime,
            environment: config.environment,
        }
    }

    /// Build a client for the environment named by the `DYNOTABLE_LOCAL`
    /// process flag.
    pub fn from_env() -> Self {
        TableAdmin::new(AdminConfig {
            environment: Environment::detect(),
            ..AdminConfig::default()
        })
    }

    /// Wrap a preconfigured SDK client.
    pub fn from_client(client: Client, environment: Environment) -> Self {
        TableAdmin {
            client,
            runtime: RUNTIME.clone(),
            environment,
        }
    }

    /// The environment this client was built for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Create a table with the default (10, 10) provisioned throughput.
    pub fn create(&self, table: &str) -> Action<CreateTableOutput> {
        self.create_with_throughput(table, ProvisionedCapacity::default())
    }

    /// Create a table with the given provisioned throughput.
    pub fn create_with_throughput(
        &self,
        table: &str,
        capacity: ProvisionedCapacity,
    ) -> Action<CreateTableOutput> {
        self.runtime.block_on(create_table(&self.client, table, capacity))
    }

    /// Update an existing table's provisioned throughput.
    pub fn update(&self, table: &str, capacity: ProvisionedCapacity) -> Action<UpdateTableOutput> {
        self.runtime.block_on(update_table(&self.client, table, capacity))
    }

    /// Delete a table.
    pub fn delete(&self, table: &str) -> Action<DeleteTableOutput> {
        self.runtime.block_on(delete_table(&self.client, table))
    }

    /// Check whether a table exists.
    pub fn exists(&self, table: &str) -> Result<bool, TableAdminError> {
        self.runtime.block_on(table_exists(&self.client, table))
    }

    /// Block until a table reports `ACTIVE` or `timeout` elapses.
    pub fn wait_for_active(&self, table: &str, timeout: Duration) -> Result<(), TableAdminError> {
        self.runtime
            .block_on(wait_for_table_active(&self.client, table, timeout))
    }

    /// Verify connectivity with a ListTables round-trip.
    pub fn ping(&self) -> Result<(), TableAdminError> {
        let result = self
            .runtime
            .block_on(self.client.list_tables().limit(1).send());

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let text = sdk_error_text(&e);
                warn!(error = %text, "ListTables probe failed");
                Err(TableAdminError::Connection(text))
            }
        }
    }
}

/// Build the AWS SDK DynamoDB client for the given configuration.
async fn build_client(config: &AdminConfig) -> Client {
    let region_provider = match config.environment {
        Environment::Local => RegionProviderChain::first_try(Region::new(LOCAL_REGION)),
        Environment::Aws => {
            RegionProviderChain::first_try(config.region.clone().map(Region::new))
                .or_default_provider()
                .or_else(DEFAULT_REGION)
        }
    };

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);

    match config.environment {
        Environment::Local => {
            let endpoint = config
                .endpoint_url
                .clone()
                .unwrap_or_else(|| LOCAL_ENDPOINT.to_string());
            builder = builder.endpoint_url(endpoint);
        }
        Environment::Aws => {
            if let Some(url) = &config.endpoint_url {
                builder = builder.endpoint_url(url);
            }
        }
    }

    Client::from_conf(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{STATUS_FAILURE, STATUS_SUCCESS};
    use aws_sdk_dynamodb::operation::create_table::CreateTableError;
    use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
    use aws_sdk_dynamodb::types::error::{ResourceInUseException, ResourceNotFoundException};
    use aws_sdk_dynamodb::types::{TableDescription, TableStatus};
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    fn created_output() -> CreateTableOutput {
        CreateTableOutput::builder()
            .table_description(
                TableDescription::builder()
                    .table_name("dynamo")
                    .table_status(TableStatus::Creating)
                    .build(),
            )
            .build()
    }

    // Blocking surface, so plain #[test]: the client drives the shared
    // runtime itself.
    #[test]
    fn create_twice_yields_success_then_failure() {
        let rule = mock!(aws_sdk_dynamodb::Client::create_table)
            .sequence()
            .output(created_output)
            .error(|| {
                CreateTableError::ResourceInUseException(
                    ResourceInUseException::builder()
                        .message("Table already in use: dynamo")
                        .build(),
                )
            })
            .build();
        let client = mock_client!(aws_sdk_dynamodb, [&rule]);
        let admin = TableAdmin::from_client(client, Environment::Aws);

        let first = admin.create("dynamo");
        assert_eq!(first.status(), STATUS_SUCCESS);
        assert!(first.result().is_some());

        let second = admin.create("dynamo");
        assert_eq!(second.status(), STATUS_FAILURE);
        assert!(second.message().contains("Unable to create table"));
        assert!(second.result().is_none());
    }

    #[test]
    fn create_then_delete_round_trip() {
        let create_rule = mock!(aws_sdk_dynamodb::Client::create_table)
            .then_output(created_output);
        let delete_rule = mock!(aws_sdk_dynamodb::Client::delete_table).then_output(|| {
            DeleteTableOutput::builder()
                .table_description(
                    TableDescription::builder()
                        .table_name("dynamo")
                        .table_status(TableStatus::Deleting)
                        .build(),
                )
                .build()
        });
        let client = mock_client!(
            aws_sdk_dynamodb,
            RuleMode::MatchAny,
            [&create_rule, &delete_rule]
        );
        let admin = TableAdmin::from_client(client, Environment::Aws);

        assert!(admin.create("dynamo").is_success());
        let deleted = admin.delete("dynamo");
        assert_eq!(deleted.status(), STATUS_SUCCESS);
        assert_eq!(deleted.message(), "Successfully deleted table : dynamo");
    }

    #[test]
    fn delete_of_missing_table_fails() {
        let rule = mock!(aws_sdk_dynamodb::Client::delete_table).then_error(|| {
            DeleteTableError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("Requested resource not found")
                    .build(),
            )
        });
        let client = mock_client!(aws_sdk_dynamodb, [&rule]);
        let admin = TableAdmin::from_client(client, Environment::Aws);

        let action = admin.delete("dynamo");
        assert_eq!(action.status(), STATUS_FAILURE);
        assert!(action.result().is_none());
    }

    #[test]
    fn environment_is_fixed_at_construction() {
        let rule = mock!(aws_sdk_dynamodb::Client::list_tables)
            .then_output(|| aws_sdk_dynamodb::operation::list_tables::ListTablesOutput::builder().build());
        let client = mock_client!(aws_sdk_dynamodb, [&rule]);
        let admin = TableAdmin::from_client(client, Environment::Local);

        assert_eq!(admin.environment(), Environment::Local);
        admin.ping().expect("mocked ListTables succeeds");
    }
}
