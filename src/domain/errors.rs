use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Ingrese un número")]
    BlankPhoneNumber,
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),
    #[error("No application can open the link: {0}")]
    NoHandlerAvailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
