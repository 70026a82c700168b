fn main() {
    // The webview bundle in dist/ is static; no frontend build step.
    tauri_build::build();
}
