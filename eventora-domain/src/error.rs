use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown event type '{0}'")]
    UnknownCategory(String),
    #[error("unknown event status '{0}'")]
    UnknownStatus(String),
    #[error("unknown booking status '{0}'")]
    UnknownBookingStatus(String),
    #[error("unknown user role '{0}'")]
    UnknownRole(String),
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}

/// Required-field failures collected from a form draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("please fill in the required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn check(fields: Vec<&'static str>) -> Result<(), ValidationError> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}

/// Failures surfaced by the gateway ports.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response payload: {0}")]
    Schema(String),
    #[error("local storage error: {0}")]
    Storage(String),
}
