//! Table administration operations for DynamoDB.
//!
//! This module provides the table lifecycle operations:
//! - `create` - Create a table keyed by the fixed `Name` hash attribute
//! - `update` - Update a table's provisioned throughput
//! - `delete` - Delete a table
//! - `exists` - Check whether a table exists
//! - `wait` - Wait for a table to become active
//!
//! Each operation is a single round-trip; the create/update/delete cores
//! normalize every outcome into an [`Action`](crate::Action) envelope.

mod create;
mod delete;
mod exists;
mod update;
mod wait;

pub use create::create_table;
pub use delete::delete_table;
pub use exists::table_exists;
pub use update::update_table;
pub use wait::wait_for_table_active;

use aws_sdk_dynamodb::error::BuildError;
use aws_sdk_dynamodb::types::ProvisionedThroughput;
use serde::{Deserialize, Serialize};

/// The single hash-key attribute every table is created with.
pub const KEY_ATTRIBUTE: &str = "Name";

/// Default read capacity units when none are given.
pub const DEFAULT_READ_CAPACITY_UNITS: i64 = 10;

/// Default write capacity units when none are given.
pub const DEFAULT_WRITE_CAPACITY_UNITS: i64 = 10;

/// Provisioned throughput for a table (input).
///
/// Capacities must be positive; the service enforces this, not the client.
/// Field names follow DynamoDB's wire casing so capacity blocks can be read
/// straight from JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedCapacity {
    /// The maximum number of strongly consistent reads per second.
    pub read_capacity_units: i64,
    /// The maximum number of writes per second.
    pub write_capacity_units: i64,
}

impl ProvisionedCapacity {
    pub fn new(read_capacity_units: i64, write_capacity_units: i64) -> Self {
        ProvisionedCapacity {
            read_capacity_units,
            write_capacity_units,
        }
    }

    pub(crate) fn to_throughput(self) -> Result<ProvisionedThroughput, BuildError> {
        ProvisionedThroughput::builder()
            .read_capacity_units(self.read_capacity_units)
            .write_capacity_units(self.write_capacity_units)
            .build()
    }
}

impl Default for ProvisionedCapacity {
    fn default() -> Self {
        ProvisionedCapacity::new(DEFAULT_READ_CAPACITY_UNITS, DEFAULT_WRITE_CAPACITY_UNITS)
    }
}
