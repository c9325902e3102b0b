use tracing::{info, warn};

use crate::{AppError, AppState};
use eventora_domain::{normalize_optional_text, Credentials, Registration, Session, ValidationError};

pub async fn login(state: &AppState, email: String, password: String) -> Result<Session, AppError> {
    let email = normalize_optional_text(Some(email));
    let mut missing = Vec::new();
    if email.is_none() {
        missing.push("email");
    }
    if password.is_empty() {
        missing.push("password");
    }
    ValidationError::check(missing)?;

    let credentials = Credentials {
        email: email.unwrap_or_default(),
        password,
    };
    let session = state.auth.login(&credentials).await.map_err(|err| {
        warn!("login failed for {}: {}", credentials.email, err);
        AppError::from(err)
    })?;
    state.session.sign_in(session.clone()).await?;
    info!("signed in as {}", credentials.email);
    Ok(session)
}

pub async fn register(
    state: &AppState,
    name: String,
    email: String,
    password: String,
) -> Result<Session, AppError> {
    let name = normalize_optional_text(Some(name));
    let email = normalize_optional_text(Some(email));
    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if email.is_none() {
        missing.push("email");
    }
    if password.is_empty() {
        missing.push("password");
    }
    ValidationError::check(missing)?;

    let registration = Registration {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password,
    };
    let session = state.auth.register(&registration).await?;
    state.session.sign_in(session.clone()).await?;
    info!("registered {}", registration.email);
    Ok(session)
}

pub async fn logout(state: &AppState) -> Result<(), AppError> {
    state.session.sign_out().await?;
    info!("signed out");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::testing::{app_state, FakeEventGateway};

    #[tokio::test]
    async fn register_then_login_persists_session() {
        let state = app_state(Arc::new(FakeEventGateway::default())).await;
        register(&state, "Ana".into(), "ana@example.com".into(), "secret".into())
            .await
            .expect("register");
        logout(&state).await.expect("logout");
        assert!(!state.session.is_signed_in().await);

        let session = login(&state, " ana@example.com ".into(), "secret".into())
            .await
            .expect("login");
        assert_eq!(session.token, "token-ana@example.com");
        assert_eq!(state.session.token().await, Some(session.token));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let state = app_state(Arc::new(FakeEventGateway::default())).await;
        register(&state, "Ana".into(), "ana@example.com".into(), "secret".into())
            .await
            .expect("register");
        logout(&state).await.expect("logout");

        let err = login(&state, "ana@example.com".into(), "nope".into())
            .await
            .expect_err("rejected");
        assert!(matches!(err, AppError::Unauthorized));
        assert!(!state.session.is_signed_in().await);
    }

    #[tokio::test]
    async fn blank_credentials_are_reported_together() {
        let state = app_state(Arc::new(FakeEventGateway::default())).await;
        let err = login(&state, "  ".into(), String::new()).await.expect_err("invalid");
        assert_eq!(
            err.to_string(),
            "please fill in the required fields: email, password"
        );
    }
}
