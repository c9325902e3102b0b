use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use eventora_domain::{AuthGateway, Credentials, GatewayError, Registration, Session, User};

use crate::http::schemas::{decode, AuthResponseDto};
use crate::http::ApiClient;

pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn session_from(body: Value) -> Result<Session, GatewayError> {
    let dto: AuthResponseDto = decode(body)?;
    if dto.token.trim().is_empty() {
        return Err(GatewayError::Schema("empty token in auth response".to_string()));
    }
    Ok(Session {
        token: dto.token,
        user: dto.user.map(User::try_from).transpose()?,
    })
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError> {
        let body = self
            .api
            .send_json(Method::POST, &["auth", "login"], credentials)
            .await?;
        session_from(body)
    }

    async fn register(&self, registration: &Registration) -> Result<Session, GatewayError> {
        let body = self
            .api
            .send_json(Method::POST, &["auth", "register"], registration)
            .await?;
        session_from(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::api_client::test_support::client;

    #[tokio::test]
    async fn login_returns_token_and_profile() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "ana@example.com", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "jwt",
                "user": {"_id": "u1", "name": "Ana", "email": "ana@example.com", "role": "ADMIN"}
            })))
            .mount(&server)
            .await;

        let gateway = HttpAuthGateway::new(client(&server.uri(), None));
        let session = gateway
            .login(&Credentials {
                email: "ana@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .expect("login");
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.map(|user| user.name), Some("Ana".to_string()));
    }

    #[tokio::test]
    async fn rejected_credentials_are_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
            .mount(&server)
            .await;

        let gateway = HttpAuthGateway::new(client(&server.uri(), None));
        let err = gateway
            .login(&Credentials {
                email: "ana@example.com".to_string(),
                password: "bad".to_string(),
            })
            .await
            .expect_err("rejected");
        assert!(matches!(err, GatewayError::Unauthorized));
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(matches!(
            session_from(json!({"token": " "})),
            Err(GatewayError::Schema(_))
        ));
    }
}
