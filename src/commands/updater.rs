use log::error;
use tauri::AppHandle;

use crate::error::Result;
use crate::updater::{Relaunch, UpdateCheck, UpdateInfo, UpdateManager};

/// Asks the update server for a newer build
///
/// # Example
/// ```js
/// const update = await invoke('check_update'); // null when up to date
/// ```
#[tauri::command]
pub async fn check_update(app: AppHandle) -> Result<Option<UpdateInfo>> {
    let manager = UpdateManager::new(app);
    Ok(manager.check().await?.into_available())
}

/// Downloads and installs the offered update, then relaunches
#[tauri::command]
pub async fn install_update(app: AppHandle) -> Result<()> {
    let manager = UpdateManager::new(app);
    if let Err(e) = manager.download_and_install().await {
        error!("Failed to install update: {}", e);
        return Err(e.into());
    }
    manager.relaunch();
    Ok(())
}

#[tauri::command]
pub fn restart_app(app: AppHandle) {
    UpdateManager::new(app).relaunch();
}
