use serde::Serialize;

use super::coordinates::Coordinates;
use crate::domain::value_objects::PhoneNumber;

pub const DEFAULT_MESSAGE: &str = "Estoy perdido, por favor encuéntrenme";

const LOCATION_PREFIX: &str = "Mi ubicación: ";

/// One send attempt, built from the current form contents and then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessageRequest {
    pub phone_number: PhoneNumber,
    pub body_text: String,
    pub coordinates: Coordinates,
}

impl OutgoingMessageRequest {
    pub fn new(
        phone_number: PhoneNumber,
        body_text: String,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            phone_number,
            body_text,
            coordinates,
        }
    }

    pub fn compose(&self) -> String {
        compose_message(&self.body_text, &self.coordinates)
    }
}

/// Body text followed by the location line on its own row.
pub fn compose_message(body_text: &str, coordinates: &Coordinates) -> String {
    format!("{body_text}\n{LOCATION_PREFIX}{}", coordinates.map_link())
}
