//! HTTP API layer for request/response handling.
//!
//! Translates HTTP requests into registry operations and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors with JSON error rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration for shortening endpoints

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
