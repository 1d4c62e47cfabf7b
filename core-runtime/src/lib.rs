//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the hydrobond client:
//! - Logging and tracing bootstrap
//! - Client configuration (base URLs and HTTP transport)
//!
//! ## Overview
//!
//! The other workspace crates only emit `tracing` events and accept a
//! [`ClientConfig`](config::ClientConfig); this crate is where a host wires
//! both together.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
