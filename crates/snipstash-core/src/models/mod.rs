pub mod draft;
pub mod language;
pub mod snippet;

pub use draft::{NewSnippet, SnippetDraft};
pub use language::Language;
pub use snippet::Snippet;
