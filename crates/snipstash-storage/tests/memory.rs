use snipstash_core::models::{Language, NewSnippet};
use snipstash_core::store::SnippetStore;
use snipstash_storage::memory::MemoryStore;
use uuid::Uuid;

fn new_snippet(title: &str, language: Language, content: &str) -> NewSnippet {
    NewSnippet {
        title: title.to_string(),
        language,
        content: content.to_string(),
    }
}

#[tokio::test]
async fn create_then_fetch_by_id_round_trips() {
    let store = MemoryStore::new();

    let created = store
        .create(new_snippet("Hello", Language::JavaScript, "console.log(1)"))
        .await
        .unwrap();

    let fetched = store.fetch_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Hello");
    assert_eq!(fetched.language, Language::JavaScript);
    assert_eq!(fetched.content, "console.log(1)");
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_replaces_fields_but_not_created_at() {
    let store = MemoryStore::new();
    let created = store
        .create(new_snippet("Before", Language::Python, "print(1)"))
        .await
        .unwrap();

    store
        .update(
            created.id,
            new_snippet("After", Language::Rust, "println!(\"1\")"),
        )
        .await
        .unwrap();

    let fetched = store.fetch_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "After");
    assert_eq!(fetched.language, Language::Rust);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let err = store
        .update(
            Uuid::new_v4(),
            new_snippet("Ghost", Language::Go, "panic()"),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        snipstash_core::error::StoreError::NotFound { .. }
    ));
}

#[tokio::test]
async fn delete_removes_the_record_and_tolerates_unknown_ids() {
    let store = MemoryStore::new();
    let created = store
        .create(new_snippet("Doomed", Language::C, "exit(0);"))
        .await
        .unwrap();

    store.delete(created.id).await.unwrap();
    assert!(store.fetch_by_id(created.id).await.unwrap().is_none());

    // Second delete of the same id still succeeds.
    store.delete(created.id).await.unwrap();
    assert!(store.fetch_all().await.unwrap().is_empty());
}
