use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::preview_link::PreviewLinkRequest,
    domain::models::Coordinates,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::{bad_request, map_domain_error, map_preview},
        requests::PreviewLinkRequestDto,
        responses::DeepLinkDto,
    },
};

#[derive(Clone)]
pub struct LinksEndpoints {
    state: Arc<ApiState>,
}

impl LinksEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl LinksEndpoints {
    /// Builds the WhatsApp link without opening it.
    #[oai(path = "/links/whatsapp", method = "post", tag = EndpointsTags::Links)]
    pub async fn preview_link(
        &self,
        request: Json<PreviewLinkRequestDto>,
    ) -> PoemResult<Json<DeepLinkDto>> {
        let coordinates = match (request.latitude, request.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            (None, None) => None,
            _ => {
                return Err(bad_request(
                    "latitude and longitude must be given together",
                ));
            }
        };

        let payload = PreviewLinkRequest {
            phone_number: request.phone_number.clone(),
            message: request.message.clone(),
            coordinates,
        };

        let preview = self
            .state
            .preview_link_usecase
            .execute(payload)
            .await
            .map_err(map_domain_error)?;

        Ok(Json(map_preview(preview)))
    }
}
