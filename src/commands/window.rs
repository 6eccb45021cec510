//! Overlay window commands
//!
//! The overlay is frameless, so the frontend drives moving, resizing and
//! closing through these commands. Errors are returned as localized strings.

use rust_i18n::t;
use serde::{Deserialize, Serialize};
use tauri::{command, PhysicalPosition, PhysicalSize, Window};

use crate::constants::FALLBACK_SCREEN_SIZE;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

#[command]
pub async fn set_window_position(window: Window, x: f64, y: f64) -> Result<(), String> {
    window
        .set_position(PhysicalPosition::new(x, y))
        .map_err(|e| t!("main.failed_to_set_window_position", error = e).to_string())
}

#[command]
pub async fn set_window_size(window: Window, width: f64, height: f64) -> Result<(), String> {
    window
        .set_size(PhysicalSize::new(width, height))
        .map_err(|e| t!("main.failed_to_set_window_size", error = e).to_string())
}

#[command]
pub async fn get_window_size(window: Window) -> Result<WindowSize, String> {
    let size = window
        .outer_size()
        .map_err(|e| t!("main.failed_to_get_window_size", error = e).to_string())?;
    Ok(WindowSize {
        width: size.width as f64,
        height: size.height as f64,
    })
}

#[command]
pub async fn get_window_position(window: Window) -> Result<(f64, f64), String> {
    let position = window
        .outer_position()
        .map_err(|e| t!("main.failed_to_get_window_position", error = e).to_string())?;
    Ok((position.x as f64, position.y as f64))
}

/// Size of the monitor the overlay is on
///
/// Falls back to the primary monitor, then to 1920x1080.
#[command]
pub async fn get_screen_size(window: Window) -> Result<(f64, f64), String> {
    if let Ok(Some(monitor)) = window.current_monitor() {
        let size = monitor.size();
        return Ok((size.width as f64, size.height as f64));
    }

    if let Ok(Some(monitor)) = window.primary_monitor() {
        let size = monitor.size();
        return Ok((size.width as f64, size.height as f64));
    }

    log::debug!("No monitor information available, using fallback screen size");
    Ok(FALLBACK_SCREEN_SIZE)
}

#[command]
pub async fn set_window_focusable(window: Window, focusable: bool) -> Result<(), String> {
    window
        .set_focusable(focusable)
        .map_err(|e| t!("main.failed_to_set_window_focusable", error = e).to_string())
}

#[command]
pub async fn start_dragging(window: Window) -> Result<(), String> {
    window
        .start_dragging()
        .map_err(|e| t!("main.failed_to_start_dragging", error = e).to_string())
}

#[command]
pub async fn close_overlay(window: Window) -> Result<(), String> {
    window
        .close()
        .map_err(|e| t!("main.failed_to_close_window", error = e).to_string())
}
