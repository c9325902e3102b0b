// Form validation
// Checked before any request is issued; a failing draft is never submitted.

use crate::entities::{BookingDraft, EventDraft, UserDraft, VendorDraft};
use crate::error::ValidationError;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for EventDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.category.is_none() {
            missing.push("type");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if !self.base_price.map(|price| price.is_positive()).unwrap_or(false) {
            missing.push("basePrice");
        }
        ValidationError::check(missing)
    }
}

impl Validate for VendorDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.service_type.trim().is_empty() {
            missing.push("serviceType");
        }
        if self.starting_price.map(|price| price.is_negative()).unwrap_or(false) {
            missing.push("startingPrice");
        }
        ValidationError::check(missing)
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if !looks_like_email(&self.email) {
            missing.push("email");
        }
        ValidationError::check(missing)
    }
}

impl Validate for BookingDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.event.as_ref().map(|id| id.as_str().is_empty()).unwrap_or(true) {
            missing.push("event");
        }
        if self.user.as_ref().map(|id| id.as_str().is_empty()).unwrap_or(true) {
            missing.push("user");
        }
        if self.guests == 0 {
            missing.push("guests");
        }
        if self.amount.map(|amount| amount.is_negative()).unwrap_or(false) {
            missing.push("amount");
        }
        ValidationError::check(missing)
    }
}

fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
