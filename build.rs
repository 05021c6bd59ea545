fn main() {
    // The webview shell only exists with the desktop feature; the core builds headless.
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
