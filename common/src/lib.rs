//! Shared building blocks for `machange`.
//!
//! * **[`network`]**: MAC address parsing and generation.
//! * **[`config`]**: The validated, immutable run configuration.
//! * **[`system`]**: The port describing the OS tools the core drives.
//! * **[`error`]**: Error types shared by the crates.
//! * **[`ui`]**: The port through which results reach the user.

pub mod config;
pub mod error;
pub mod network;
pub mod system;
pub mod ui;
