//! HTTP middleware for request processing.
//!
//! Provides observability middleware.

pub mod trace;
