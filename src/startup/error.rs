/// Failures of the host environment while mounting the overlay UI.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("No mount point labelled '{0}' exists")]
    AnchorNotFound(String),

    #[error("The host refused to mount the overlay: {0}")]
    Host(String),
}
