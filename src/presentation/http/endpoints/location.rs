use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::send_location::SendLocationRequest,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{internal_error, map_domain_error, map_screen, map_send},
        requests::SendLocationRequestDto,
        responses::{ScreenStateDto, SendLocationResponseDto},
    },
};

#[derive(Clone)]
pub struct LocationEndpoints {
    state: Arc<ApiState>,
}

impl LocationEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl LocationEndpoints {
    /// Opens the send-location screen, asking for location access if needed.
    #[oai(path = "/location/screen", method = "get", tag = EndpointsTags::Location)]
    pub async fn screen(&self) -> PoemResult<Json<ScreenStateDto>> {
        let screen = self
            .state
            .load_screen_usecase
            .execute()
            .await
            .map_err(internal_error)?;

        Ok(Json(map_screen(&screen)))
    }

    /// Builds the WhatsApp link and hands it to the configured opener.
    #[oai(path = "/location/send", method = "post", tag = EndpointsTags::Location)]
    pub async fn send(
        &self,
        request: Json<SendLocationRequestDto>,
    ) -> PoemResult<Json<SendLocationResponseDto>> {
        let payload = SendLocationRequest {
            phone_number: request.phone_number.clone(),
            message: request.message.clone(),
        };

        let response = self
            .state
            .send_location_usecase
            .execute(payload)
            .await
            .map_err(map_domain_error)?;

        Ok(Json(map_send(response)))
    }
}
