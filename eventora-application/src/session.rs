// Session context
//
// One instance is built at startup and handed to every component through
// `AppState`. Writes go through the token store so the HTTP layer sees the
// same bearer token.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use eventora_domain::{Session, TokenStore, User};

use crate::AppError;

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    pub async fn restore(store: Arc<dyn TokenStore>) -> Self {
        let current = match store.load().await {
            Ok(session) => session,
            Err(err) => {
                warn!("failed to restore session: {}", err);
                None
            }
        };
        debug!("session restored: signed_in={}", current.is_some());
        Self {
            store,
            current: Arc::new(RwLock::new(current)),
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub async fn user(&self) -> Option<User> {
        self.current
            .read()
            .await
            .as_ref()
            .and_then(|session| session.user.clone())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn sign_in(&self, session: Session) -> Result<(), AppError> {
        let mut guard = self.current.write().await;
        self.store.save(&session).await?;
        *guard = Some(session);
        Ok(())
    }

    pub async fn set_user(&self, user: Option<User>) -> Result<(), AppError> {
        let mut guard = self.current.write().await;
        let Some(session) = guard.as_ref() else {
            return Err(AppError::Unauthorized);
        };
        let updated = Session {
            token: session.token.clone(),
            user,
        };
        self.store.save(&updated).await?;
        *guard = Some(updated);
        Ok(())
    }

    pub async fn sign_out(&self) -> Result<(), AppError> {
        let mut guard = self.current.write().await;
        self.store.clear().await?;
        *guard = None;
        Ok(())
    }
}
