use std::io::Error;
use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    application::{services::link_opener::LinkOpener, usecases::load_screen::LoadScreenConfig},
    config::{Config, OpenerConfig},
    infrastructure::{
        location::fixed::FixedLocationProvider,
        opener::{adb::AdbIntentOpener, logging::LoggingLinkOpener},
    },
    presentation::http::{build_app, endpoints::root::ApiState},
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    let opener: Arc<dyn LinkOpener> = match &config.opener {
        OpenerConfig::Log => LoggingLinkOpener::new(),
        OpenerConfig::Adb { path, serial } => AdbIntentOpener::new(path.clone(), serial.clone()),
    };
    let location = Arc::new(FixedLocationProvider::new(
        config.latitude,
        config.longitude,
        config.permission,
    ));

    let state = ApiState::new(
        location,
        opener.clone(),
        LoadScreenConfig {
            default_phone: config.default_phone.clone(),
            default_message: config.default_message.clone(),
        },
        config.phone_validation,
    );

    info!(opener = opener.name(), "Starting server at {}", server_url);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(build_app(Arc::new(state), server_url))
        .await
}
