//! Error types for the update process
//!
//! Defines the error types that can occur while checking for, downloading
//! and installing application updates.

use rust_i18n::t;
use serde::Serialize;

/// Errors that can occur during the update process
#[derive(Debug, thiserror::Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum UpdateError {
    /// The updater plugin is missing or misconfigured
    #[error("Updater configuration error: {0}")]
    Config(String),

    /// The update endpoint could not be reached or answered with garbage
    #[error("Update request failed: {0}")]
    Request(String),

    /// A version string could not be parsed as semver
    #[error("Failed to parse version '{version}': {error}")]
    VersionParse { version: String, error: String },

    /// Error during download or installation
    #[error("Update installation failed: {0}")]
    Install(String),

    /// The offered version is not newer than the running one
    #[error("{}", t!("updater.version_mismatch"))]
    VersionMismatch,

    /// Update not found
    #[error("{}", t!("updater.update_not_found"))]
    UpdateNotFound,
}

pub type Result<T> = std::result::Result<T, UpdateError>;
