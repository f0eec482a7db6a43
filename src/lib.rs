//! Attic - Minimal HTTP/1.1 Static File Server
//!
//! Core library for request parsing, response serialization, the
//! per-connection protocol state machine, and document-root file
//! resolution.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
