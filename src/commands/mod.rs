//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - quote: Compute, print and optionally export a quote
//! - materials: List the material catalog
//! - serve: Start the HTTP API
//! - config: Configuration display and validation

pub mod config;
pub mod materials;
pub mod quote;
pub mod serve;
