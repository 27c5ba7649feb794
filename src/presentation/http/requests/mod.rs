use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct PreviewLinkRequestDto {
    pub phone_number: String,
    /// Defaults to the configured message when omitted.
    pub message: Option<String>,
    /// Given together with `longitude`; the device position is used otherwise.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Object, Debug)]
pub struct SendLocationRequestDto {
    pub phone_number: String,
    pub message: Option<String>,
}
