use serde::Serialize;

use crate::AppState;
use eventora_domain::User;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Whoami {
    pub signed_in: bool,
    pub user: Option<User>,
}

pub async fn whoami(state: &AppState) -> Whoami {
    let session = state.session.current().await;
    Whoami {
        signed_in: session.is_some(),
        user: session.and_then(|session| session.user),
    }
}
