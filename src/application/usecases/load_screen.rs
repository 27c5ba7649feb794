use std::sync::Arc;

use tracing::info;

use crate::{
    application::services::location::LocationProvider,
    domain::models::{
        ScreenState,
        screen::{MESSAGE_LABEL, PHONE_LABEL, SCREEN_TITLE, SEND_LABEL},
    },
};

pub struct LoadScreenConfig {
    pub default_phone: String,
    pub default_message: String,
}

pub struct LoadScreenUseCase {
    location: Arc<dyn LocationProvider>,
    config: LoadScreenConfig,
}

impl LoadScreenUseCase {
    pub fn new(location: Arc<dyn LocationProvider>, config: LoadScreenConfig) -> Self {
        Self { location, config }
    }

    pub async fn execute(&self) -> anyhow::Result<ScreenState> {
        let mut permission = self.location.permission_status().await;
        if !permission.is_granted() {
            permission = self.location.request_permission().await?;
            info!(permission = permission.as_str(), "location permission requested");
        }

        let coordinates = self.location.current().await?;

        Ok(ScreenState {
            title: SCREEN_TITLE.to_string(),
            coordinates_display: coordinates.display(),
            coordinates,
            phone_label: PHONE_LABEL.to_string(),
            default_phone: self.config.default_phone.clone(),
            message_label: MESSAGE_LABEL.to_string(),
            default_message: self.config.default_message.clone(),
            send_label: SEND_LABEL.to_string(),
            permission,
        })
    }
}
