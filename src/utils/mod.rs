//! Utility functions for alias encoding, alias policy, and input parsing.
//!
//! - [`base62`] - Reversible base62 alias codec
//! - [`alias`] - Custom alias validation and URL-derived defaults
//! - [`expiry`] - Expiration date parsing

pub mod alias;
pub mod base62;
pub mod expiry;
