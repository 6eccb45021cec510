use serde::Serialize;
use thiserror::Error;

/// The single, unified error type for the application.
///
/// Wraps the module-specific errors IPC commands can fail with, so they can
/// all return one type. Startup, speech and config failures never reach the
/// frontend; they are logged where they happen.
/// The `#[serde(tag = "module", content = "details")]` attribute keeps the
/// JSON seen by the frontend predictable.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "module", content = "details")]
pub enum AppError {
    #[error(transparent)]
    Updater(#[from] crate::updater::UpdateError),

    #[error(transparent)]
    Countdown(#[from] crate::countdown::CountdownError),

    #[error("{message}")]
    General { message: String },
}

// Lets commands hand an AppError to the frontend as a JSON string with a
// top-level human readable `message`.
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        let error_message = error.to_string();

        match serde_json::to_value(&error) {
            Ok(mut value) => {
                if let Some(obj) = value.as_object_mut() {
                    obj.insert(
                        "message".to_string(),
                        serde_json::Value::String(error_message.clone()),
                    );
                }
                serde_json::to_string(&value).unwrap_or(error_message)
            }
            Err(e) => serde_json::json!({
                "module": "Internal",
                "details": {
                    "kind": "SerializationFailed",
                    "message": format!("Failed to serialize error: {}", e)
                },
                "message": error_message
            })
            .to_string(),
        }
    }
}

#[cfg(feature = "desktop")]
impl From<tauri::Error> for AppError {
    fn from(err: tauri::Error) -> Self {
        AppError::General {
            message: err.to_string(),
        }
    }
}

/// A universal Result type for Tauri commands and other fallible functions.
pub type Result<T> = std::result::Result<T, AppError>;
