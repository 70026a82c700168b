//! Smoke test for the snippet session against the in-memory store.
//!
//! Exercises the full controller lifecycle without a webview or an S3
//! bucket: add, list, filter, edit, and delete.
//!
//! Usage:
//!   cargo run -p snipstash-desktop --example session_smoke

use snipstash_core::models::{Language, SnippetDraft};
use snipstash_session::{SnippetList, SnippetSession};
use snipstash_storage::memory::MemoryStore;

fn draft(title: &str, language: Language, content: &str) -> SnippetDraft {
    SnippetDraft {
        title: title.to_string(),
        language: Some(language),
        content: content.to_string(),
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut session = SnippetSession::new(MemoryStore::new());

    println!("Adding two snippets...");
    session
        .submit(&draft(
            "Debounce helper",
            Language::JavaScript,
            "function debounce(fn, ms) { /* ... */ }",
        ))
        .await
        .map_err(|e| eyre::eyre!("add failed: {e}"))?;
    session
        .submit(&draft("CSV reader", Language::Python, "import csv"))
        .await
        .map_err(|e| eyre::eyre!("add failed: {e}"))?;
    session.load().await.map_err(|e| eyre::eyre!("{e}"))?;

    println!("Catalog now holds {} snippets:", session.snippets().len());
    for s in session.snippets() {
        println!("  [{}] {} — {}", s.language, s.title, s.id);
    }

    println!("\nFiltering for 'csv'...");
    for s in session.visible("csv", None) {
        println!("  matched: {}", s.title);
    }

    println!("\nEditing the first snippet...");
    let id = session.snippets()[0].id;
    let populated = session
        .begin_edit(id)
        .await
        .map_err(|e| eyre::eyre!("{e}"))?;
    println!("  form populated with: {:?}", populated.title);

    session
        .submit(&draft(
            "Debounce helper (typed)",
            Language::TypeScript,
            "function debounce<T>(fn: T, ms: number) { /* ... */ }",
        ))
        .await
        .map_err(|e| eyre::eyre!("update failed: {e}"))?;
    session.load().await.map_err(|e| eyre::eyre!("{e}"))?;
    println!("  title is now: {}", session.snippets()[0].title);

    println!("\nDeleting it...");
    println!("  prompt: {}", session.removal_prompt(id));
    session.remove(id).await.map_err(|e| eyre::eyre!("{e}"))?;
    session.load().await.map_err(|e| eyre::eyre!("{e}"))?;

    match session.view("", None).list {
        SnippetList::Cards { cards } => println!("Remaining cards: {}", cards.len()),
        SnippetList::Empty => println!("Remaining cards: none (placeholder shown)"),
    }

    Ok(())
}
