//! Tavola Server - REST API for restaurant search
//!
//! This crate provides the HTTP surface for Tavola:
//!
//! - **Search**: restaurant search with client-side filters
//! - **Health**: service status and upstream key configuration
//! - **Debug**: raw upstream diagnostics for key/billing problems
//!
//! # API Documentation
//!
//! When running the server, interactive API documentation is available
//! at `/swagger-ui`.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
