use poem_openapi::Object;
use uuid::Uuid;

use crate::presentation::models::PermissionKind;

#[derive(Object)]
pub struct ScreenStateDto {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub coordinates_display: String,
    pub phone_label: String,
    pub default_phone: String,
    pub message_label: String,
    pub default_message: String,
    pub send_label: String,
    pub permission: PermissionKind,
}

#[derive(Object)]
pub struct DeepLinkDto {
    pub link: String,
    pub message: String,
}

#[derive(Object)]
pub struct SendLocationResponseDto {
    pub request_id: Uuid,
    pub link: String,
    pub message: String,
    pub opener: String,
    pub dispatched_at: String,
}
