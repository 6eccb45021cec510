// modules
pub mod clock;
#[cfg(feature = "desktop")]
mod commands;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod logger;
pub mod speech;
pub mod startup;
pub mod updater;
#[cfg(feature = "desktop")]
mod window;


use rust_i18n::i18n;

// Translations live in i18n/ next to Cargo.toml
i18n!("i18n", fallback = "en");

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::Arc;

    use log::error;
    use parking_lot::Mutex;
    use rust_i18n::t;

    use crate::commands::clock::*;
    use crate::commands::countdown::*;
    use crate::commands::updater::*;
    use crate::commands::window::*;
    use crate::config::load_startup_config;
    use crate::countdown::{Countdown, SharedCountdown};
    use crate::logger::setup_logger;
    use crate::speech::{PowerShellSpeaker, SharedSpeaker};
    use crate::startup::StartupSequencer;
    use crate::updater::UpdateManager;
    use crate::window::WebviewMount;

    /// The entry point for the Tauri application.
    ///
    /// Registers the plugins, the countdown and speech state and the IPC
    /// commands, then launches the startup sequence from the setup hook:
    /// an update check whose failure is only logged, followed by showing
    /// the overlay window.
    ///
    /// # Example
    ///
    /// ```js
    /// await invoke('start_countdown', { seconds: 600 });
    /// const { remaining_seconds, status } = await invoke('get_countdown_status');
    /// ```
    pub async fn run() -> crate::error::Result<()> {
        let countdown: SharedCountdown = Arc::new(Mutex::new(Countdown::default()));
        let speaker: SharedSpeaker = Arc::new(PowerShellSpeaker);

        tauri::Builder::default()
            .plugin(tauri_plugin_process::init())
            .plugin(tauri_plugin_updater::Builder::new().build())
            .plugin(tauri_plugin_opener::init())
            .manage(countdown)
            .manage(speaker)
            .setup(|app| {
                setup_logger(app)?;

                let handle = app.handle().clone();
                let config = load_startup_config(&handle);
                let sequencer = StartupSequencer::new(
                    config,
                    UpdateManager::new(handle.clone()),
                    WebviewMount::new(handle),
                );
                tauri::async_runtime::spawn(async move {
                    if let Err(e) = sequencer.run().await {
                        error!("{}", t!("startup.mount_failed", error = e));
                    }
                });
                Ok(())
            })
            .invoke_handler(tauri::generate_handler![
                // clock
                get_current_time,
                // countdown
                start_countdown,
                pause_countdown,
                resume_countdown,
                restart_countdown,
                reset_countdown,
                get_countdown_status,
                // window
                set_window_position,
                set_window_size,
                get_window_size,
                get_screen_size,
                get_window_position,
                set_window_focusable,
                start_dragging,
                close_overlay,
                // updater
                check_update,
                install_update,
                restart_app,
            ])
            .run(tauri::generate_context!())?;

        Ok(())
    }
}
