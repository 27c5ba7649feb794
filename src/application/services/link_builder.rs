use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::models::{Coordinates, compose_message};

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Bytes left as-is inside the `text` value: alphanumerics plus `_-!.~'()*`.
/// Everything else, including space, `:`, `/`, `?`, `&` and newline, becomes `%XX`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Builds the `wa.me` deep link that opens a chat with `phone_number`
/// pre-filled with `body_text` and a map link to the given coordinates.
///
/// Only surrounding whitespace is stripped from the phone number. Callers
/// must reject blank numbers before getting here.
pub fn build_deep_link(
    phone_number: &str,
    body_text: &str,
    latitude: f64,
    longitude: f64,
) -> String {
    let message = compose_message(body_text, &Coordinates::new(latitude, longitude));
    link_for_message(phone_number, &message)
}

/// Same link as [`build_deep_link`] for a message that already carries the
/// location line.
pub fn link_for_message(phone_number: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}{}?text={}",
        phone_number.trim(),
        encode_query_value(message)
    )
}

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
