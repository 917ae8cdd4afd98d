//! Table administration client for Amazon DynamoDB.
//!
//! Wraps the DynamoDB administrative API (CreateTable, UpdateTable,
//! DeleteTable) behind a uniform [`Action`] envelope carrying an outcome
//! code, a message, and the raw SDK payload on success. Service failures are
//! converted at the boundary; the envelope operations never return `Err`.
//!
//! Calls target either the managed service (default credential and region
//! resolution) or a local emulator such as DynamoDB Local, selected through
//! [`AdminConfig`] or detected from the `DYNOTABLE_LOCAL` environment
//! variable.
//!
//! # Examples
//!
//! ```no_run
//! use dynotable::{AdminConfig, Environment, TableAdmin};
//!
//! let admin = TableAdmin::new(AdminConfig {
//!     environment: Environment::Local,
//!     ..AdminConfig::default()
//! });
//!
//! let action = admin.create("users");
//! assert_eq!(action.status(), dynotable::STATUS_SUCCESS);
//! println!("{}", action.message());
//! ```

pub mod action;
pub mod client;
pub mod env;
pub mod errors;
pub mod logging;
pub mod table_operations;

pub use action::{Action, STATUS_FAILURE, STATUS_SUCCESS};
pub use client::{AdminConfig, TableAdmin};
pub use env::{is_local_environment, Environment, LOCAL_ENDPOINT, LOCAL_ENV_VAR, LOCAL_REGION};
pub use errors::TableAdminError;
pub use table_operations::{
    create_table, delete_table, table_exists, update_table, wait_for_table_active,
    ProvisionedCapacity,
};
