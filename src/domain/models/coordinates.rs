use serde::{Deserialize, Serialize};

const MAPS_BASE_URL: &str = "https://maps.google.com/?q=";

/// Geographic position as opaque numbers. No range check is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Map URL with both values at full precision.
    ///
    /// `f64`'s `Display` never switches to exponent notation and always uses
    /// `.` as the decimal separator.
    pub fn map_link(&self) -> String {
        format!("{MAPS_BASE_URL}{},{}", self.latitude, self.longitude)
    }

    /// Human readable line, rounded to five decimals. Never used in links.
    pub fn display(&self) -> String {
        format!("Lat.: {:.5}  Lon.: {:.5}", self.latitude, self.longitude)
    }
}
