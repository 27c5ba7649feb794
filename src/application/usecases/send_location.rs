use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    application::services::{
        link_builder::link_for_message, link_opener::LinkOpener, location::LocationProvider,
    },
    domain::{
        errors::DomainError,
        models::OutgoingMessageRequest,
        value_objects::{PhoneNumber, PhoneValidation},
    },
};

pub struct SendLocationUseCase {
    location: Arc<dyn LocationProvider>,
    opener: Arc<dyn LinkOpener>,
    validation: PhoneValidation,
    default_message: String,
}

pub struct SendLocationRequest {
    pub phone_number: String,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct SendLocationResponse {
    pub request_id: Uuid,
    pub link: String,
    pub message: String,
    pub opener: &'static str,
    pub dispatched_at: DateTime<Utc>,
}

impl SendLocationUseCase {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        opener: Arc<dyn LinkOpener>,
        validation: PhoneValidation,
        default_message: String,
    ) -> Self {
        Self {
            location,
            opener,
            validation,
            default_message,
        }
    }

    #[tracing::instrument(skip_all, fields(request_id = tracing::field::Empty))]
    pub async fn execute(
        &self,
        request: SendLocationRequest,
    ) -> Result<SendLocationResponse, DomainError> {
        let request_id = Uuid::new_v4();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        // the send is aborted before any link exists
        let phone_number = PhoneNumber::parse(&request.phone_number).inspect_err(|_| {
            warn!("rejected send without phone number");
        })?;
        self.validation.check(&phone_number)?;

        let coordinates = self.location.current().await?;
        let body_text = request
            .message
            .unwrap_or_else(|| self.default_message.clone());
        let outgoing = OutgoingMessageRequest::new(phone_number, body_text, coordinates);

        let message = outgoing.compose();
        let link = link_for_message(outgoing.phone_number.as_str(), &message);
        debug!(%link, "built deep link");

        self.opener.open(&link).await.inspect_err(|err| {
            warn!(opener = self.opener.name(), error = %err, "link handoff failed");
        })?;

        debug!(phone = %outgoing.phone_number, "link handed off");
        info!(opener = self.opener.name(), "location handed off");

        Ok(SendLocationResponse {
            request_id,
            message,
            link,
            opener: self.opener.name(),
            dispatched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        application::test_support::{FailingOpener, RecordingOpener},
        domain::models::{DEFAULT_MESSAGE, PermissionStatus},
        infrastructure::location::fixed::FixedLocationProvider,
    };

    fn provider(permission: PermissionStatus) -> Arc<dyn LocationProvider> {
        Arc::new(FixedLocationProvider::new(9.32756, -79.58518, permission))
    }

    fn request(phone: &str, message: Option<&str>) -> SendLocationRequest {
        SendLocationRequest {
            phone_number: phone.to_string(),
            message: message.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn hands_the_link_to_the_opener() {
        let opener = Arc::new(RecordingOpener::default());
        let usecase = SendLocationUseCase::new(
            provider(PermissionStatus::Granted),
            opener.clone(),
            PhoneValidation::Lenient,
            DEFAULT_MESSAGE.to_string(),
        );

        let response = usecase.execute(request(" +507 ", None)).await.unwrap();

        assert_eq!(
            response.link,
            "https://wa.me/+507?text=Estoy%20perdido%2C%20por%20favor%20encu%C3%A9ntrenme%0AMi%20ubicaci%C3%B3n%3A%20https%3A%2F%2Fmaps.google.com%2F%3Fq%3D9.32756%2C-79.58518"
        );
        assert_eq!(
            response.message,
            "Estoy perdido, por favor encuéntrenme\nMi ubicación: https://maps.google.com/?q=9.32756,-79.58518"
        );
        assert_eq!(response.opener, "recording");
        assert_eq!(opener.opened().await, vec![response.link]);
    }

    #[tokio::test]
    #[traced_test]
    async fn returned_message_is_the_linked_text() {
        let usecase = SendLocationUseCase::new(
            provider(PermissionStatus::Granted),
            Arc::new(RecordingOpener::default()),
            PhoneValidation::Lenient,
            DEFAULT_MESSAGE.to_string(),
        );

        let response = usecase
            .execute(request("+50761234567", Some("a & b?")))
            .await
            .unwrap();

        let (_, encoded) = response.link.split_once("?text=").unwrap();
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, response.message);

        assert!(logs_contain("location handed off"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .find(|line| line.contains(" INFO ") && line.contains("50761234567"))
            {
                Some(line) => Err(format!("phone number logged at info: {line}")),
                None => Ok(()),
            }
        });
    }

    #[tokio::test]
    async fn blank_phone_aborts_before_handoff() {
        let opener = Arc::new(RecordingOpener::default());
        let usecase = SendLocationUseCase::new(
            provider(PermissionStatus::Granted),
            opener.clone(),
            PhoneValidation::Lenient,
            DEFAULT_MESSAGE.to_string(),
        );

        for phone in ["", "   "] {
            let err = usecase.execute(request(phone, Some("hola"))).await.unwrap_err();
            assert!(matches!(err, DomainError::BlankPhoneNumber));
            assert_eq!(err.to_string(), "Ingrese un número");
        }
        assert!(opener.opened().await.is_empty());
    }

    #[tokio::test]
    async fn strict_validation_rejects_before_handoff() {
        let opener = Arc::new(RecordingOpener::default());
        let usecase = SendLocationUseCase::new(
            provider(PermissionStatus::Granted),
            opener.clone(),
            PhoneValidation::Strict,
            DEFAULT_MESSAGE.to_string(),
        );

        let err = usecase.execute(request("507-6123", None)).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidPhoneNumber(_)));
        assert!(opener.opened().await.is_empty());
    }

    #[tokio::test]
    async fn denied_permission_does_not_block_sending() {
        let opener = Arc::new(RecordingOpener::default());
        let usecase = SendLocationUseCase::new(
            provider(PermissionStatus::Denied),
            opener.clone(),
            PhoneValidation::Lenient,
            DEFAULT_MESSAGE.to_string(),
        );

        assert!(usecase.execute(request("+507", None)).await.is_ok());
        assert_eq!(opener.opened().await.len(), 1);
    }

    #[tokio::test]
    async fn missing_handler_is_reported() {
        let usecase = SendLocationUseCase::new(
            provider(PermissionStatus::Granted),
            Arc::new(FailingOpener),
            PhoneValidation::Lenient,
            DEFAULT_MESSAGE.to_string(),
        );

        let err = usecase.execute(request("+507", None)).await.unwrap_err();

        assert!(matches!(err, DomainError::NoHandlerAvailable(_)));
    }
}
