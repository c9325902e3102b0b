// Transient user-facing notices
// Every notice stays visible for a fixed window from the moment it is raised.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::AppError;

pub const DEFAULT_NOTICE_SECONDS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    raised_at: Instant,
    visible_for: Duration,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>, visible_for: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: Instant::now(),
            visible_for,
        }
    }

    pub fn success(message: impl Into<String>, visible_for: Duration) -> Self {
        Self::new(NoticeLevel::Success, message, visible_for)
    }

    pub fn info(message: impl Into<String>, visible_for: Duration) -> Self {
        Self::new(NoticeLevel::Info, message, visible_for)
    }

    pub fn from_error(err: &AppError, visible_for: Duration) -> Self {
        Self::new(NoticeLevel::Error, human_message(err), visible_for)
    }

    pub fn visible_for(&self) -> Duration {
        self.visible_for
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < self.visible_for
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.visible_for
            .saturating_sub(now.saturating_duration_since(self.raised_at))
    }
}

fn human_message(err: &AppError) -> String {
    match err {
        AppError::Unauthorized => "Your session has expired, please sign in again".to_string(),
        AppError::Validation(validation) => {
            let mut message = validation.to_string();
            if let Some(first) = message.get(..1).map(str::to_uppercase) {
                message.replace_range(..1, &first);
            }
            message
        }
        AppError::BadRequest(message) => message.clone(),
        AppError::NotFound(what) => format!("Could not find {what}"),
        AppError::Schema(_) => "The server sent an unexpected response".to_string(),
        AppError::Backend { message, .. } if !message.trim().is_empty() => message.clone(),
        AppError::Backend { status, .. } => format!("Request failed with status {status}"),
        AppError::Internal(err) => format!("Something went wrong: {err}"),
    }
}
