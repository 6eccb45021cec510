use async_trait::async_trait;

use super::error::Result;
use super::types::UpdateStatus;

/// Asks the update server whether a newer build exists.
#[async_trait]
pub trait UpdateCheck: Send + Sync {
    async fn check(&self) -> Result<UpdateStatus>;
}

/// Restarts the running application process.
pub trait Relaunch: Send + Sync {
    fn relaunch(&self);
}
