//! Mounting the overlay into its webview window
//!
//! The overlay window is declared hidden in `tauri.conf.json`; mounting
//! shows and focuses it once startup has settled.

use tauri::{AppHandle, Manager, Runtime};

use crate::startup::{MountError, UiMount};

pub struct WebviewMount<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> WebviewMount<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> UiMount for WebviewMount<R> {
    fn mount(&self, anchor: &str) -> Result<(), MountError> {
        let window = self
            .app
            .get_webview_window(anchor)
            .ok_or_else(|| MountError::AnchorNotFound(anchor.to_string()))?;

        window
            .show()
            .map_err(|e| MountError::Host(e.to_string()))?;
        window
            .set_focus()
            .map_err(|e| MountError::Host(e.to_string()))?;

        log::debug!("Overlay mounted into window '{}'", anchor);
        Ok(())
    }
}
