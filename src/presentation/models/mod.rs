use poem_openapi::Enum;

use crate::domain::models::PermissionStatus;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum PermissionKind {
    #[oai(rename = "not_requested")]
    NotRequested,
    #[oai(rename = "granted")]
    Granted,
    #[oai(rename = "denied")]
    Denied,
}

impl From<PermissionStatus> for PermissionKind {
    fn from(value: PermissionStatus) -> Self {
        match value {
            PermissionStatus::NotRequested => PermissionKind::NotRequested,
            PermissionStatus::Granted => PermissionKind::Granted,
            PermissionStatus::Denied => PermissionKind::Denied,
        }
    }
}
