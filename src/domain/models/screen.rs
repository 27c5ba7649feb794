use serde::Serialize;

use super::{coordinates::Coordinates, permission::PermissionStatus};

pub const SCREEN_TITLE: &str = "Enviar mi ubicación";
pub const PHONE_LABEL: &str = "Número (+507…)";
pub const MESSAGE_LABEL: &str = "Mensaje";
pub const SEND_LABEL: &str = "Enviar a WhatsApp";

/// Everything the send-location screen shows when it is opened.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenState {
    pub title: String,
    pub coordinates: Coordinates,
    pub coordinates_display: String,
    pub phone_label: String,
    pub default_phone: String,
    pub message_label: String,
    pub default_message: String,
    pub send_label: String,
    pub permission: PermissionStatus,
}
