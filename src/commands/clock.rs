use crate::clock::{current_time, TimeResponse};

/// Current overlay time
///
/// # Example
/// ```js
/// import { invoke } from '@tauri-apps/api/core'
///
/// const { time } = await invoke('get_current_time');
/// ```
#[tauri::command]
pub fn get_current_time() -> TimeResponse {
    current_time()
}
