use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use eventora_application::{AppState, SessionContext};
use eventora_domain::{Booking, TokenStore, User, Vendor};
use eventora_infrastructure::{
    ApiClient, AppConfig, FileTokenStore, HttpAuthGateway, HttpEventGateway, HttpResourceGateway,
    SystemClock,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let tokens: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(&config.session_path));
        let api = ApiClient::new(&runtime_config, tokens.clone())?;
        let session = SessionContext::restore(tokens).await;
        debug!(
            "context ready: api={} session={}",
            runtime_config.api_base_url,
            config.session_path.display()
        );

        let state = AppState {
            config: runtime_config,
            events: Arc::new(HttpEventGateway::new(api.clone())),
            auth: Arc::new(HttpAuthGateway::new(api.clone())),
            vendors: Arc::new(HttpResourceGateway::<Vendor>::new(api.clone())),
            users: Arc::new(HttpResourceGateway::<User>::new(api.clone())),
            bookings: Arc::new(HttpResourceGateway::<Booking>::new(api)),
            session,
            clock: Arc::new(SystemClock),
        };

        Ok(Self { state })
    }
}
