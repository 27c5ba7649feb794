use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{application::services::link_opener::LinkOpener, domain::errors::DomainError};

/// Used when no device is attached: the link is only written to the log.
pub struct LoggingLinkOpener;

impl LoggingLinkOpener {
    pub fn new() -> Arc<dyn LinkOpener> {
        Arc::new(Self) as Arc<dyn LinkOpener>
    }
}

#[async_trait]
impl LinkOpener for LoggingLinkOpener {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn open(&self, uri: &str) -> Result<(), DomainError> {
        info!(uri, "[log] opening link");
        Ok(())
    }
}
