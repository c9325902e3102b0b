use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use eventora_domain::{Session, TokenStore};

/// Persists the session as JSON so it survives between invocations.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> anyhow::Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str::<Session>(&content) {
            Ok(session) if !session.token.trim().is_empty() => Ok(Some(session)),
            Ok(_) => Ok(None),
            Err(err) => {
                warn!("ignoring unreadable session file {}: {}", self.path.display(), err);
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventora_domain::{User, UserRole};

    #[tokio::test]
    async fn session_round_trips_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().join("nested").join("session.json"));
        assert!(store.load().await.expect("load").is_none());

        let session = Session {
            token: "jwt".to_string(),
            user: Some(User {
                id: "u1".into(),
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                role: UserRole::Admin,
                created_at: None,
            }),
        };
        store.save(&session).await.expect("save");
        assert_eq!(store.load().await.expect("load"), Some(session));

        store.clear().await.expect("clear");
        assert!(!store.path().exists());
        store.clear().await.expect("clear twice");
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").await.expect("write");
        let store = FileTokenStore::new(path);
        assert!(store.load().await.expect("load").is_none());
    }
}
