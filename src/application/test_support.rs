use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    application::services::{link_opener::LinkOpener, location::LocationProvider},
    domain::{
        errors::DomainError,
        models::{Coordinates, PermissionStatus},
    },
};

#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub async fn opened(&self) -> Vec<String> {
        self.opened.lock().await.clone()
    }
}

#[async_trait]
impl LinkOpener for RecordingOpener {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn open(&self, uri: &str) -> Result<(), DomainError> {
        self.opened.lock().await.push(uri.to_string());
        Ok(())
    }
}

pub struct FailingOpener;

#[async_trait]
impl LinkOpener for FailingOpener {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn open(&self, _uri: &str) -> Result<(), DomainError> {
        Err(DomainError::NoHandlerAvailable(
            "no activity found for https://wa.me".to_string(),
        ))
    }
}

/// Location source that is never available.
pub struct UnavailableLocation;

#[async_trait]
impl LocationProvider for UnavailableLocation {
    async fn permission_status(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn request_permission(&self) -> anyhow::Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn current(&self) -> anyhow::Result<Coordinates> {
        anyhow::bail!("location service unavailable")
    }
}
