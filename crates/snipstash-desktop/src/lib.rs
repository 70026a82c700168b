//! snipstash-desktop library root.
//!
//! Re-exports internal modules so that examples and integration tests
//! can exercise them directly without going through the Tauri command
//! layer.

pub mod aws;
pub mod clipboard;
pub mod config;
