use std::sync::Arc;

use crate::{
    application::services::{link_builder::link_for_message, location::LocationProvider},
    domain::{
        errors::DomainError,
        models::{Coordinates, OutgoingMessageRequest},
        value_objects::{PhoneNumber, PhoneValidation},
    },
};

pub struct PreviewLinkUseCase {
    location: Arc<dyn LocationProvider>,
    validation: PhoneValidation,
    default_message: String,
}

pub struct PreviewLinkRequest {
    pub phone_number: String,
    pub message: Option<String>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug)]
pub struct PreviewLinkResponse {
    pub link: String,
    pub message: String,
}

impl PreviewLinkUseCase {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        validation: PhoneValidation,
        default_message: String,
    ) -> Self {
        Self {
            location,
            validation,
            default_message,
        }
    }

    pub async fn execute(
        &self,
        request: PreviewLinkRequest,
    ) -> Result<PreviewLinkResponse, DomainError> {
        let phone_number = PhoneNumber::parse(&request.phone_number)?;
        self.validation.check(&phone_number)?;

        let coordinates = match request.coordinates {
            Some(coordinates) => coordinates,
            None => self.location.current().await?,
        };
        let body_text = request
            .message
            .unwrap_or_else(|| self.default_message.clone());
        let outgoing = OutgoingMessageRequest::new(phone_number, body_text, coordinates);

        let message = outgoing.compose();

        Ok(PreviewLinkResponse {
            link: link_for_message(outgoing.phone_number.as_str(), &message),
            message,
        })
    }
}
