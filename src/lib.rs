//! Lantern - single-request static file server
//!
//! Core library for request parsing, file resolution and response writing.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
