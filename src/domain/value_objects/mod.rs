use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Longest subscriber number allowed by E.164, not counting the leading `+`.
const MAX_E164_DIGITS: usize = 15;

/// Phone number as typed by the user, trimmed and known to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::BlankPhoneNumber);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneValidation {
    /// Only blank input is rejected.
    #[default]
    Lenient,
    /// A leading `+` followed by one to fifteen digits.
    Strict,
}

impl PhoneValidation {
    pub fn check(&self, phone: &PhoneNumber) -> Result<(), DomainError> {
        match self {
            PhoneValidation::Lenient => Ok(()),
            PhoneValidation::Strict => {
                let digits = phone
                    .as_str()
                    .strip_prefix('+')
                    .ok_or_else(|| {
                        DomainError::InvalidPhoneNumber(format!(
                            "{phone} must start with an international dial code"
                        ))
                    })?;

                if digits.is_empty()
                    || digits.len() > MAX_E164_DIGITS
                    || !digits.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(DomainError::InvalidPhoneNumber(format!(
                        "{phone} must contain between 1 and {MAX_E164_DIGITS} digits"
                    )));
                }
                Ok(())
            }
        }
    }
}
