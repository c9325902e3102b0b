// Runtime configuration shared with the application layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub public_paths: Vec<String>,
    pub request_timeout_seconds: u64,
    pub page_size: u32,
    pub stats_page_size: u32,
    pub notice_seconds: u64,
    pub upcoming_window_days: u32,
}
