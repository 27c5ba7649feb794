use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::root::{ApiState, endpoints};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        endpoints(state),
        "Location Share API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .with(Tracing)
}
