use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::{
        services::{link_opener::LinkOpener, location::LocationProvider},
        usecases::{
            load_screen::{LoadScreenConfig, LoadScreenUseCase},
            preview_link::PreviewLinkUseCase,
            send_location::SendLocationUseCase,
        },
    },
    domain::value_objects::PhoneValidation,
    presentation::http::endpoints::{
        health::HealthEndpoints, links::LinksEndpoints, location::LocationEndpoints,
    },
};

#[derive(Clone)]
pub struct ApiState {
    pub load_screen_usecase: Arc<LoadScreenUseCase>,
    pub preview_link_usecase: Arc<PreviewLinkUseCase>,
    pub send_location_usecase: Arc<SendLocationUseCase>,
}

impl ApiState {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        opener: Arc<dyn LinkOpener>,
        screen: LoadScreenConfig,
        validation: PhoneValidation,
    ) -> Self {
        let default_message = screen.default_message.clone();
        Self {
            preview_link_usecase: Arc::new(PreviewLinkUseCase::new(
                location.clone(),
                validation,
                default_message.clone(),
            )),
            send_location_usecase: Arc::new(SendLocationUseCase::new(
                location.clone(),
                opener,
                validation,
                default_message,
            )),
            load_screen_usecase: Arc::new(LoadScreenUseCase::new(location, screen)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Location,
    Links,
}

pub type Endpoints = (HealthEndpoints, LocationEndpoints, LinksEndpoints);

pub fn endpoints(state: Arc<ApiState>) -> Endpoints {
    (
        HealthEndpoints,
        LocationEndpoints::new(state.clone()),
        LinksEndpoints::new(state),
    )
}
