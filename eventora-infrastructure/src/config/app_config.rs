use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use eventora_application::notice::DEFAULT_NOTICE_SECONDS;
use eventora_domain::{RuntimeConfig, DEFAULT_PAGE_SIZE, DEFAULT_UPCOMING_WINDOW_DAYS};

use super::validation::{validate_base_url, validate_log_level};

pub const CONFIG_ENV: &str = "EVENTORA_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./eventora.toml";
/// Ten years; longer windows count nearly everything as upcoming.
pub const MAX_UPCOMING_WINDOW_DAYS: u32 = 3_650;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub page_size: u32,
    pub stats_page_size: u32,
    pub session_path: PathBuf,
    pub public_paths: Vec<String>,
    pub notice_seconds: u64,
    pub upcoming_window_days: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000/api".to_string(),
            request_timeout_seconds: 15,
            page_size: DEFAULT_PAGE_SIZE,
            stats_page_size: 100,
            session_path: default_session_path(),
            public_paths: vec!["/auth/login".to_string(), "/auth/register".to_string()],
            notice_seconds: DEFAULT_NOTICE_SECONDS,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// `path`, else `$EVENTORA_CONFIG`, else `./eventora.toml`.
    pub fn config_path(path: Option<PathBuf>) -> PathBuf {
        path.or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub async fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = Self::config_path(path);
        if !path.exists() {
            warn!("{} not found, using defaults", path.display());
        }
        Self::load_from(&path).await
    }

    /// Reads `path` when it exists, then applies env overrides and checks the result.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).await?;
            toml::from_str::<AppConfig>(&content)
                .map_err(|err| anyhow!("failed to parse {}: {}", path.display(), err))?
        } else {
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(path.parent());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.log_level = self.log_level.trim().to_ascii_lowercase();
        self.public_paths = normalize_path_list(std::mem::take(&mut self.public_paths));
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.stats_page_size == 0 {
            self.stats_page_size = 100;
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if self.session_path.is_relative() && !self.session_path.as_os_str().is_empty() {
            self.session_path = base.join(&self.session_path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.api_base_url)?;
        validate_log_level(&self.log_level)?;
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.session_path.as_os_str().is_empty() {
            return Err(anyhow!("session_path must not be empty"));
        }
        if self.notice_seconds == 0 {
            return Err(anyhow!("notice_seconds must be greater than 0"));
        }
        if !(1..=MAX_UPCOMING_WINDOW_DAYS).contains(&self.upcoming_window_days) {
            return Err(anyhow!(
                "upcoming_window_days must be between 1 and {}",
                MAX_UPCOMING_WINDOW_DAYS
            ));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.clone(),
            public_paths: self.public_paths.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            page_size: self.page_size,
            stats_page_size: self.stats_page_size,
            notice_seconds: self.notice_seconds,
            upcoming_window_days: self.upcoming_window_days,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("EVENTORA_API_BASE_URL") {
            self.api_base_url = value;
        }
        if let Some(value) = lookup("EVENTORA_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("EVENTORA_PAGE_SIZE") {
            self.page_size = value.parse().unwrap_or(self.page_size);
        }
        if let Some(value) = lookup("EVENTORA_STATS_PAGE_SIZE") {
            self.stats_page_size = value.parse().unwrap_or(self.stats_page_size);
        }
        if let Some(value) = lookup("EVENTORA_SESSION_PATH") {
            self.session_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("EVENTORA_PUBLIC_PATHS") {
            self.public_paths = value.split(',').map(ToString::to_string).collect();
        }
        if let Some(value) = lookup("EVENTORA_NOTICE_SECONDS") {
            self.notice_seconds = value.parse().unwrap_or(self.notice_seconds);
        }
        if let Some(value) = lookup("EVENTORA_UPCOMING_WINDOW_DAYS") {
            self.upcoming_window_days = value.parse().unwrap_or(self.upcoming_window_days);
        }
        if let Some(value) = lookup("EVENTORA_LOG_LEVEL") {
            self.log_level = value;
        }
    }
}

fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventora")
        .join("session.json")
}

fn normalize_path_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = values
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}
