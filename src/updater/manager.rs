//! Update manager implementation
//!
//! Wraps `tauri-plugin-updater` for checking and installing updates, and the
//! app handle for restarting the process afterwards.

use async_trait::async_trait;
use log::{debug, info};
use tauri::{AppHandle, Emitter, Runtime};
use tauri_plugin_updater::{Update, UpdaterExt};

use super::error::{Result, UpdateError};
use super::traits::{Relaunch, UpdateCheck};
use super::types::{UpdateInfo, UpdateStatus};
use crate::constants::{EVENT_UPDATE_PROGRESS, EVENT_UPDATE_READY};

impl From<&Update> for UpdateInfo {
    fn from(update: &Update) -> Self {
        Self {
            version: update.version.clone(),
            current_version: update.current_version.clone(),
            notes: update.body.clone(),
            date: update.date.map(|d| d.to_string()),
        }
    }
}

/// Checks, installs and relaunches through the Tauri updater plugin.
pub struct UpdateManager<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> UpdateManager<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }

    async fn fetch(&self) -> Result<Option<Update>> {
        let updater = self
            .app
            .updater()
            .map_err(|e| UpdateError::Config(e.to_string()))?;

        updater
            .check()
            .await
            .map_err(|e| UpdateError::Request(e.to_string()))
    }

    /// Downloads and installs the update currently offered by the server.
    ///
    /// Progress is emitted to the frontend as `update://download-progress`.
    /// The caller decides when to relaunch.
    pub async fn download_and_install(&self) -> Result<UpdateInfo> {
        let update = self.fetch().await?.ok_or(UpdateError::UpdateNotFound)?;
        let info = UpdateInfo::from(&update);
        if !info.is_newer()? {
            return Err(UpdateError::VersionMismatch);
        }

        info!("Downloading update {} -> {}", info.current_version, info.version);
        let mut downloaded: usize = 0;
        update
            .download_and_install(
                |chunk_length, content_length| {
                    downloaded += chunk_length;
                    let progress = content_length
                        .filter(|total| *total > 0)
                        .map(|total| (downloaded as f64 / total as f64) * 100.0)
                        .unwrap_or(0.0);
                    let _ = self.app.emit(
                        EVENT_UPDATE_PROGRESS,
                        serde_json::json!({ "progress": progress }),
                    );
                },
                || debug!("Update download finished"),
            )
            .await
            .map_err(|e| UpdateError::Install(e.to_string()))?;

        info!("Update {} installed", info.version);
        let _ = self.app.emit(EVENT_UPDATE_READY, &info);
        Ok(info)
    }
}

#[async_trait]
impl<R: Runtime> UpdateCheck for UpdateManager<R> {
    async fn check(&self) -> Result<UpdateStatus> {
        let Some(update) = self.fetch().await? else {
            return Ok(UpdateStatus::UpToDate);
        };

        let info = UpdateInfo::from(&update);
        if info.is_newer()? {
            Ok(UpdateStatus::Available(info))
        } else {
            Ok(UpdateStatus::UpToDate)
        }
    }
}

impl<R: Runtime> Relaunch for UpdateManager<R> {
    fn relaunch(&self) {
        info!("Relaunching application");
        self.app.restart()
    }
}
