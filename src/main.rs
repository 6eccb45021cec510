// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

/// The entry point of the application.
/// Hands the tokio runtime to Tauri and runs the overlay until it exits.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tauri::async_runtime::set(tokio::runtime::Handle::current());
    lola_lib::run().await?;
    Ok(())
}
