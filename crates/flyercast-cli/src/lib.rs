//! # flyercast-cli
//!
//! The command-line dashboard: role-gated commands over the REST client
//! plus the share resolver, with a locally persisted session standing in
//! for the browser's stored login.

pub mod commands;
pub mod guard;
pub mod output;
pub mod store;

pub use commands::Cli;
