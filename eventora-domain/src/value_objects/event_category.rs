// Event category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventCategory {
    Wedding,
    Birthday,
    Conference,
    Corporate,
    Party,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Wedding,
        EventCategory::Birthday,
        EventCategory::Conference,
        EventCategory::Corporate,
        EventCategory::Party,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Wedding => "WEDDING",
            EventCategory::Birthday => "BIRTHDAY",
            EventCategory::Conference => "CONFERENCE",
            EventCategory::Corporate => "CORPORATE",
            EventCategory::Party => "PARTY",
            EventCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == upper)
            .ok_or_else(|| DomainError::UnknownCategory(s.trim().to_string()))
    }
}
