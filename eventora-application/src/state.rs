use std::sync::Arc;
use std::time::Duration;

use eventora_domain::{
    AuthGateway, Booking, Clock, EventGateway, ResourceGateway, RuntimeConfig, User, Vendor,
};

use crate::{AppError, Notice, SessionContext};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub events: Arc<dyn EventGateway>,
    pub auth: Arc<dyn AuthGateway>,
    pub vendors: Arc<dyn ResourceGateway<Vendor>>,
    pub users: Arc<dyn ResourceGateway<User>>,
    pub bookings: Arc<dyn ResourceGateway<Booking>>,
    pub session: SessionContext,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn notice_window(&self) -> Duration {
        Duration::from_secs(self.config.notice_seconds)
    }

    pub fn success_notice(&self, message: impl Into<String>) -> Notice {
        Notice::success(message, self.notice_window())
    }

    pub fn error_notice(&self, err: &AppError) -> Notice {
        Notice::from_error(err, self.notice_window())
    }
}
