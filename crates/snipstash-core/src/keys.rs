//! S3 key/path conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of snippet documents in the Snipstash bucket.

use uuid::Uuid;

pub const SNIPPETS_PREFIX: &str = "snippets/";

pub fn snippet(id: Uuid) -> String {
    format!("snippets/{id}.json")
}
