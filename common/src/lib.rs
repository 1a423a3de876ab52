//! # AliasGuard Common
//!
//! Shared building blocks for the AliasGuard workspace.
//!
//! * **[`address`]**: parsing and validation of Gmail base addresses.
//! * **[`method`]**: the alias derivation strategies.
//! * **[`history`]**: the persisted history record.
//! * **[`store`]**: the key-value store port the history is mirrored to.
//! * **[`config`]**: runtime configuration shared by the binaries.
//! * **[`error`]**: user-facing domain errors.
//!
//! The logging macros ([`success!`], [`info!`], [`warn!`], [`error!`]) emit
//! `tracing` events that the CLI formatter renders with status symbols.

pub mod address;
pub mod config;
pub mod error;
pub mod history;
pub mod log;
pub mod method;
pub mod store;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
