use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::Session;

/// Persistent storage for the bearer token and signed-in user.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<Session>>;
    async fn save(&self, session: &Session) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
