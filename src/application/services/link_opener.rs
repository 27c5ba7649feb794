use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Hands a URI to whatever application on the target system handles it.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    fn name(&self) -> &'static str;
    async fn open(&self, uri: &str) -> Result<(), DomainError>;
}
