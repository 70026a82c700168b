//! snipstash-storage
//!
//! Store adapters: the S3-backed snippet catalog and an in-memory stand-in
//! for tests and demos. Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod snippets;
