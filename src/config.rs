use std::env::var;
use std::path::PathBuf;

use dotenvy::dotenv;
use thiserror::Error;

use crate::domain::{
    models::{DEFAULT_MESSAGE, PermissionStatus},
    value_objects::PhoneValidation,
};

const DEFAULT_PHONE: &str = "+507";
const DEMO_LATITUDE: f64 = 9.32756;
const DEMO_LONGITUDE: f64 = -79.58518;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("An error occured while getting {0} env param")]
    Missing(&'static str),
    #[error("An error occured while parsing {name} env param: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OpenerConfig {
    Log,
    Adb { path: PathBuf, serial: Option<String> },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub default_phone: String,
    pub default_message: String,
    pub latitude: f64,
    pub longitude: f64,
    pub permission: PermissionStatus,
    pub opener: OpenerConfig,
    pub phone_validation: PhoneValidation,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        let invalid = |name: &'static str, value: String| ConfigError::Invalid { name, value };

        let port = required("PORT")?;
        let port = port.parse::<u16>().map_err(|_| invalid("PORT", port))?;

        let latitude = parse_or("DEMO_LATITUDE", lookup("DEMO_LATITUDE"), DEMO_LATITUDE)?;
        let longitude = parse_or("DEMO_LONGITUDE", lookup("DEMO_LONGITUDE"), DEMO_LONGITUDE)?;

        let permission = match lookup("LOCATION_PERMISSION") {
            None => PermissionStatus::Granted,
            Some(value) => match PermissionStatus::from_str(&value) {
                Some(status @ (PermissionStatus::Granted | PermissionStatus::Denied)) => status,
                _ => return Err(invalid("LOCATION_PERMISSION", value)),
            },
        };

        let opener = match lookup("LINK_OPENER").as_deref() {
            None | Some("log") => OpenerConfig::Log,
            Some("adb") => OpenerConfig::Adb {
                path: PathBuf::from(lookup("ADB_PATH").unwrap_or_else(|| "adb".to_string())),
                serial: lookup("ADB_SERIAL").filter(|s| !s.trim().is_empty()),
            },
            Some(other) => return Err(invalid("LINK_OPENER", other.to_string())),
        };

        let phone_validation = match lookup("STRICT_PHONE").as_deref() {
            None | Some("false") | Some("0") => PhoneValidation::Lenient,
            Some("true") | Some("1") => PhoneValidation::Strict,
            Some(other) => return Err(invalid("STRICT_PHONE", other.to_string())),
        };

        Ok(Config {
            port,
            scheme: required("SCHEME")?,
            host: required("HOST")?,
            default_phone: lookup("DEFAULT_PHONE").unwrap_or_else(|| DEFAULT_PHONE.to_string()),
            default_message: lookup("DEFAULT_MESSAGE")
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            latitude,
            longitude,
            permission,
            opener,
            phone_validation,
        })
    }
}

fn parse_or(name: &'static str, value: Option<String>, default: f64) -> Result<f64, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
