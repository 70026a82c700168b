use serde::Serialize;
use tauri::State;
use uuid::Uuid;

use snipstash_core::models::{Language, SnippetDraft};
use snipstash_desktop::config::{self, ConfigInfo, CredentialSource, SnipstashConfig};
use snipstash_desktop::{aws, clipboard};
use snipstash_session::notify::COPY_FEEDBACK_MS;
use snipstash_session::{Notice, SnippetSession, ViewState};
use snipstash_storage::snippets::S3SnippetStore;

use crate::state::{DesktopState, S3Session};

const NOT_CONFIGURED: &str = "not configured: call configure() first";
const GENERIC_ERROR: &str = "An unexpected error occurred. Please try again.";

/// What the webview reconciles after an operation: notices to toast, the
/// view to render, and optionally new form contents. An absent `form`
/// means leave the form exactly as the user left it.
#[derive(Debug, Serialize)]
pub struct UiUpdate {
    pub notices: Vec<Notice>,
    pub view: ViewState,
    pub form: Option<SnippetDraft>,
}

#[derive(Debug, Serialize)]
pub struct CopyOutcome {
    pub copied: bool,
    pub feedback_ms: u32,
    pub notices: Vec<Notice>,
}

async fn build_session(config: &SnipstashConfig) -> S3Session {
    let sdk = aws::build_aws_config(&config.region, &config.credentials).await;
    let client = snipstash_storage::client::from_sdk_config(&sdk);
    SnippetSession::new(S3SnippetStore::new(client, config.bucket.clone()))
}

/// Restore a previously saved configuration on startup, if any.
#[tauri::command]
pub async fn restore_config(
    state: State<'_, DesktopState>,
) -> Result<Option<ConfigInfo>, String> {
    if !config::has_config() {
        return Ok(None);
    }

    let config = config::load_config().map_err(|e| {
        tracing::error!(error = %e, "failed to load saved config");
        GENERIC_ERROR.to_string()
    })?;

    let session = build_session(&config).await;
    *state.session.lock().await = Some(session);
    Ok(Some(config::config_info(&config)))
}

#[tauri::command]
pub async fn configure(
    state: State<'_, DesktopState>,
    region: String,
    bucket: String,
    credentials: CredentialSource,
) -> Result<ConfigInfo, String> {
    let config = SnipstashConfig {
        config_version: 0, // stamped on save
        region,
        bucket,
        created_at: jiff::Timestamp::now(),
        credentials,
    };

    config::save_config(&config).map_err(|e| {
        tracing::error!(error = %e, "failed to save config");
        GENERIC_ERROR.to_string()
    })?;

    let session = build_session(&config).await;
    *state.session.lock().await = Some(session);
    Ok(config::config_info(&config))
}

#[tauri::command]
pub async fn reset_config(state: State<'_, DesktopState>) -> Result<(), String> {
    config::delete_config().map_err(|e| {
        tracing::error!(error = %e, "failed to delete config");
        GENERIC_ERROR.to_string()
    })?;
    *state.session.lock().await = None;
    Ok(())
}

#[tauri::command]
pub fn list_profiles() -> Vec<String> {
    aws::list_aws_profiles()
}

/// Re-fetch the catalog and render it under the current filter controls.
#[tauri::command]
pub async fn load_snippets(
    state: State<'_, DesktopState>,
    search: String,
    language: Option<Language>,
) -> Result<UiUpdate, String> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or(NOT_CONFIGURED)?;

    let mut notices = Vec::new();
    if let Err(e) = session.load().await {
        notices.push(Notice::from(&e));
    }

    Ok(UiUpdate {
        notices,
        view: session.view(&search, language),
        form: None,
    })
}

/// Pure re-render for search/filter input changes.
#[tauri::command]
pub async fn snippet_view(
    state: State<'_, DesktopState>,
    search: String,
    language: Option<Language>,
) -> Result<ViewState, String> {
    let guard = state.session.lock().await;
    let session = guard.as_ref().ok_or(NOT_CONFIGURED)?;
    Ok(session.view(&search, language))
}

/// Create or update, depending on the session's edit state. On success the
/// form resets and the catalog is re-fetched; on failure the form is left
/// intact for retry.
#[tauri::command]
pub async fn submit_snippet(
    state: State<'_, DesktopState>,
    draft: SnippetDraft,
    search: String,
    language: Option<Language>,
) -> Result<UiUpdate, String> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or(NOT_CONFIGURED)?;

    match session.submit(&draft).await {
        Ok(notice) => {
            let mut notices = vec![notice];
            if let Err(e) = session.load().await {
                notices.push(Notice::from(&e));
            }
            Ok(UiUpdate {
                notices,
                view: session.view(&search, language),
                form: Some(SnippetDraft::default()),
            })
        }
        Err(e) => Ok(UiUpdate {
            notices: vec![Notice::from(&e)],
            view: session.view(&search, language),
            form: None,
        }),
    }
}

#[tauri::command]
pub async fn begin_edit(
    state: State<'_, DesktopState>,
    id: Uuid,
    search: String,
    language: Option<Language>,
) -> Result<UiUpdate, String> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or(NOT_CONFIGURED)?;

    match session.begin_edit(id).await {
        Ok(populated) => Ok(UiUpdate {
            notices: Vec::new(),
            view: session.view(&search, language),
            form: Some(populated),
        }),
        Err(e) => Ok(UiUpdate {
            notices: vec![Notice::from(&e)],
            view: session.view(&search, language),
            form: None,
        }),
    }
}

#[tauri::command]
pub async fn cancel_edit(
    state: State<'_, DesktopState>,
    search: String,
    language: Option<Language>,
) -> Result<UiUpdate, String> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or(NOT_CONFIGURED)?;

    let empty = session.cancel_edit();
    Ok(UiUpdate {
        notices: Vec::new(),
        view: session.view(&search, language),
        form: Some(empty),
    })
}

/// Confirmation text for the delete dialog. A declined dialog simply never
/// calls `delete_snippet`.
#[tauri::command]
pub async fn removal_prompt(
    state: State<'_, DesktopState>,
    id: Uuid,
) -> Result<String, String> {
    let guard = state.session.lock().await;
    let session = guard.as_ref().ok_or(NOT_CONFIGURED)?;
    Ok(session.removal_prompt(id))
}

#[tauri::command]
pub async fn delete_snippet(
    state: State<'_, DesktopState>,
    id: Uuid,
    search: String,
    language: Option<Language>,
) -> Result<UiUpdate, String> {
    let mut guard = state.session.lock().await;
    let session = guard.as_mut().ok_or(NOT_CONFIGURED)?;

    let mut notices = Vec::new();
    match session.remove(id).await {
        Ok(notice) => {
            notices.push(notice);
            if let Err(e) = session.load().await {
                notices.push(Notice::from(&e));
            }
        }
        Err(e) => notices.push(Notice::from(&e)),
    }

    Ok(UiUpdate {
        notices,
        view: session.view(&search, language),
        form: None,
    })
}

/// Copy a snippet's literal content to the system clipboard. Non-critical:
/// failures surface a notice and never touch session state.
#[tauri::command]
pub async fn copy_snippet(
    state: State<'_, DesktopState>,
    id: Uuid,
) -> Result<CopyOutcome, String> {
    let guard = state.session.lock().await;
    let session = guard.as_ref().ok_or(NOT_CONFIGURED)?;

    let Some(content) = session.content_of(id) else {
        return Ok(CopyOutcome {
            copied: false,
            feedback_ms: 0,
            notices: vec![Notice::error("Snippet not found. It may have been deleted.")],
        });
    };

    match clipboard::copy_text(content) {
        Ok(()) => Ok(CopyOutcome {
            copied: true,
            feedback_ms: COPY_FEEDBACK_MS,
            notices: Vec::new(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            Ok(CopyOutcome {
                copied: false,
                feedback_ms: 0,
                notices: vec![Notice::error("Failed to copy to clipboard")],
            })
        }
    }
}
