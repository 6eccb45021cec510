//! Type definitions for the update system

use semver::Version;
use serde::{Deserialize, Serialize};

use super::error::{Result, UpdateError};

/// Version information about an update offered by the update server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInfo {
    /// Offered version in semver format
    pub version: String,

    /// Version of the running application
    pub current_version: String,

    /// Release notes, if the server provides them
    pub notes: Option<String>,

    /// Publication date as reported by the server
    pub date: Option<String>,
}

impl UpdateInfo {
    /// Whether the offered version is strictly newer than the running one.
    pub fn is_newer(&self) -> Result<bool> {
        let offered = parse_version(&self.version)?;
        let current = parse_version(&self.current_version)?;
        Ok(offered > current)
    }
}

fn parse_version(version: &str) -> Result<Version> {
    Version::parse(version.trim_start_matches('v')).map_err(|e| UpdateError::VersionParse {
        version: version.to_string(),
        error: e.to_string(),
    })
}

/// Outcome of a successful update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate,
    Available(UpdateInfo),
}

impl UpdateStatus {
    pub fn into_available(self) -> Option<UpdateInfo> {
        match self {
            UpdateStatus::Available(info) => Some(info),
            UpdateStatus::UpToDate => None,
        }
    }
}
