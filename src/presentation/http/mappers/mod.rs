use poem::http::StatusCode;

use crate::{
    application::usecases::{
        preview_link::PreviewLinkResponse, send_location::SendLocationResponse,
    },
    domain::{errors::DomainError, models::ScreenState},
    presentation::http::responses::{DeepLinkDto, ScreenStateDto, SendLocationResponseDto},
};

pub fn map_screen(screen: &ScreenState) -> ScreenStateDto {
    ScreenStateDto {
        title: screen.title.clone(),
        latitude: screen.coordinates.latitude,
        longitude: screen.coordinates.longitude,
        coordinates_display: screen.coordinates_display.clone(),
        phone_label: screen.phone_label.clone(),
        default_phone: screen.default_phone.clone(),
        message_label: screen.message_label.clone(),
        default_message: screen.default_message.clone(),
        send_label: screen.send_label.clone(),
        permission: screen.permission.into(),
    }
}

pub fn map_preview(preview: PreviewLinkResponse) -> DeepLinkDto {
    DeepLinkDto {
        link: preview.link,
        message: preview.message,
    }
}

pub fn map_send(response: SendLocationResponse) -> SendLocationResponseDto {
    SendLocationResponseDto {
        request_id: response.request_id,
        link: response.link,
        message: response.message,
        opener: response.opener.to_string(),
        dispatched_at: response.dispatched_at.to_rfc3339(),
    }
}

pub fn map_domain_error(err: DomainError) -> poem::Error {
    let status = match &err {
        DomainError::BlankPhoneNumber | DomainError::InvalidPhoneNumber(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::NoHandlerAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    poem::Error::from_string(err.to_string(), status)
}

pub fn internal_error(err: anyhow::Error) -> poem::Error {
    poem::Error::from_string(err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn bad_request(message: &str) -> poem::Error {
    poem::Error::from_string(message, StatusCode::BAD_REQUEST)
}
