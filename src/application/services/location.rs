use async_trait::async_trait;

use crate::domain::models::{Coordinates, PermissionStatus};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn permission_status(&self) -> PermissionStatus;
    async fn request_permission(&self) -> anyhow::Result<PermissionStatus>;
    async fn current(&self) -> anyhow::Result<Coordinates>;
}
