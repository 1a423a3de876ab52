//! # AliasGuard Core
//!
//! * **[`generator`]**: derives aliases from a validated Gmail address.
//! * **[`history`]**: the persisted list of saved aliases.
//! * **[`export`]**: CSV rendering of the history.
//! * **[`store`]**: file and memory backed key-value stores.

pub mod export;
pub mod generator;
pub mod history;
pub mod store;

pub use generator::{AliasGenerator, AliasRequest};
pub use history::History;
