//! snipstash-session
//!
//! The snippet store controller: owns the in-memory snippet cache and the
//! edit/add-mode state, mediates between user events and the remote store,
//! and derives the view models and notices the shell renders.

pub mod error;
pub mod notify;
pub mod session;
pub mod view;

pub use error::SessionError;
pub use notify::{Notice, Severity};
pub use session::SnippetSession;
pub use view::{SnippetCard, SnippetList, ViewState};
