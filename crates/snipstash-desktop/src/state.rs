use std::sync::Arc;

use tokio::sync::Mutex;

use snipstash_session::SnippetSession;
use snipstash_storage::snippets::S3SnippetStore;

/// The one session the desktop runs, once a store is configured.
pub type S3Session = SnippetSession<S3SnippetStore>;

/// Shared application state. The mutex also serializes commands, so at most
/// one store call is ever in flight.
pub struct DesktopState {
    pub session: Arc<Mutex<Option<S3Session>>>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            session: Arc::new(Mutex::new(None)),
        }
    }
}
