//! snipstash-core
//!
//! Pure domain types, validation, filtering, and the snippet store port.
//! No AWS SDK dependency — this is the shared vocabulary of the Snipstash
//! system.

pub mod error;
pub mod filter;
pub mod keys;
pub mod models;
pub mod store;
pub mod validate;
