pub mod coordinates;
pub mod message;
pub mod permission;
pub mod screen;

pub use coordinates::Coordinates;
pub use message::{DEFAULT_MESSAGE, OutgoingMessageRequest, compose_message};
pub use permission::PermissionStatus;
pub use screen::ScreenState;
