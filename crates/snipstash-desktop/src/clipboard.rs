/// Copy text to the system clipboard.
///
/// Clipboard failures are isolated here; they never touch session state.
pub fn copy_text(text: &str) -> eyre::Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| eyre::eyre!("clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| eyre::eyre!("clipboard write failed: {e}"))?;
    Ok(())
}
