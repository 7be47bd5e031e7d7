//! Goalpost Connect - REST API access for Goalpost.
//!
//! This crate provides the HTTP client that implements the backend traits
//! defined in `goalpost-core`, along with its environment configuration.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;

// Re-export commonly used types
pub use client::GoalpostApiClient;
pub use config::ApiConfig;
