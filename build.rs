fn main() {
    // The webview context is only generated for the desktop shell.
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
