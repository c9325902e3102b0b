use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tokio::fs;
use tracing::debug;

use eventora_domain::{Event, EventDraft, EventGateway, EventId, EventQuery, GatewayError, Page};

use crate::http::schemas::{decode_one, decode_page, EventDto, ExtraItemDto};
use crate::http::ApiClient;

pub struct HttpEventGateway {
    api: ApiClient,
}

impl HttpEventGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn list_params(query: &EventQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ];
    if let Some(search) = query.filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        params.push(("search", search.to_string()));
    }
    if let Some(category) = query.filter.category {
        params.push(("type", category.as_str().to_string()));
    }
    if let Some(status) = query.filter.status {
        params.push(("status", status.as_str().to_string()));
    }
    params
}

/// Builds the multipart body shared by create and update.
pub async fn event_form(draft: &EventDraft) -> Result<Form, GatewayError> {
    let extra_items: Vec<ExtraItemDto> = draft.extra_items.iter().map(ExtraItemDto::from).collect();
    let extra_items =
        serde_json::to_string(&extra_items).map_err(|err| GatewayError::Schema(err.to_string()))?;

    let mut form = Form::new()
        .text("title", draft.title.trim().to_string())
        .text("location", draft.location.trim().to_string())
        .text("status", draft.status.as_str())
        .text("extraItems", extra_items);
    if let Some(category) = draft.category {
        form = form.text("type", category.as_str());
    }
    if let Some(date) = draft.date {
        form = form.text("date", date.format("%Y-%m-%d").to_string());
    }
    if let Some(time) = draft.time {
        form = form.text("time", time.format("%H:%M").to_string());
    }
    if let Some(description) = draft.description.as_deref() {
        form = form.text("description", description.to_string());
    }
    if let Some(base_price) = draft.base_price {
        form = form.text("basePrice", base_price.as_decimal().to_string());
    }
    if let Some(path) = draft.image_path.as_deref() {
        form = form.part("image", image_part(path).await?);
    }
    Ok(form)
}

async fn image_part(path: &Path) -> Result<Part, GatewayError> {
    let bytes = fs::read(path)
        .await
        .map_err(|err| GatewayError::Storage(format!("failed to read {}: {}", path.display(), err)))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(image_mime(path))
        .map_err(|err| GatewayError::Transport(err.to_string()))
}

fn image_mime(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[async_trait]
impl EventGateway for HttpEventGateway {
    async fn list_events(&self, query: &EventQuery) -> Result<Page<Event>, GatewayError> {
        let body = self.api.get_json(&["events"], &list_params(query)).await?;
        let page = decode_page::<EventDto, Event>(body, query.limit)?;
        debug!("received {} of {} events", page.data.len(), page.total_items);
        Ok(page)
    }

    async fn get_event(&self, id: &EventId) -> Result<Event, GatewayError> {
        let body = self.api.get_json(&["events", id.as_str()], &[]).await?;
        decode_one::<EventDto, Event>(body)
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<Event, GatewayError> {
        let form = event_form(draft).await?;
        let body = self.api.send_multipart(Method::POST, &["events"], form).await?;
        decode_one::<EventDto, Event>(body)
    }

    async fn update_event(&self, id: &EventId, draft: &EventDraft) -> Result<Event, GatewayError> {
        let form = event_form(draft).await?;
        let body = self
            .api
            .send_multipart(Method::PUT, &["events", id.as_str()], form)
            .await?;
        decode_one::<EventDto, Event>(body)
    }

    async fn delete_event(&self, id: &EventId) -> Result<(), GatewayError> {
        self.api.delete(&["events", id.as_str()]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventora_domain::{EventCategory, EventFilter, EventStatus, ExtraItem, Money};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::api_client::test_support::client;

    fn event_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "_id": id,
            "title": title,
            "type": "PARTY",
            "date": "2026-12-24",
            "location": "Loft",
            "basePrice": 50,
            "status": "PLANNING",
            "extraItems": []
        })
    }

    #[tokio::test]
    async fn list_sends_filter_as_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "6"))
            .and(query_param("search", "gala"))
            .and(query_param("type", "CORPORATE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [event_json("e7", "Corporate Gala")],
                "totalPages": 2,
                "totalItems": 7
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = HttpEventGateway::new(client(&server.uri(), Some("tok")));
        let filter = EventFilter::new(Some(" gala ".to_string()), Some(EventCategory::Corporate), None);
        let page = gateway
            .list_events(&EventQuery::new(2, 6, filter))
            .await
            .expect("list");
        assert_eq!(page.total_items, 7);
        assert_eq!(page.data[0].title, "Corporate Gala");
    }

    #[tokio::test]
    async fn create_posts_multipart_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/events"))
            .and(header("authorization", "Bearer tok"))
            .and(body_string_contains("name=\"basePrice\""))
            .and(body_string_contains("{\"name\":\"Chairs\",\"price\":10.0,\"quantity\":2}"))
            .respond_with(ResponseTemplate::new(201).set_body_json(event_json("e1", "Launch")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = HttpEventGateway::new(client(&server.uri(), Some("tok")));
        let draft = EventDraft {
            title: "Launch".to_string(),
            category: Some(EventCategory::Party),
            date: NaiveDate::from_ymd_opt(2026, 12, 24),
            location: "Loft".to_string(),
            base_price: Some(Money::from_cents(5_000)),
            status: EventStatus::Planning,
            extra_items: vec![ExtraItem::new("Chairs", Money::from_cents(1_000), 2)],
            ..EventDraft::default()
        };
        let event = gateway.create_event(&draft).await.expect("create");
        assert_eq!(event.id.as_str(), "e1");
    }

    #[tokio::test]
    async fn malformed_event_is_a_schema_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events/e1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "e1", "title": "x"})))
            .mount(&server)
            .await;

        let gateway = HttpEventGateway::new(client(&server.uri(), Some("tok")));
        let err = gateway.get_event(&EventId::from("e1")).await.expect_err("schema");
        assert!(matches!(err, GatewayError::Schema(_)));
    }

    #[tokio::test]
    async fn missing_image_file_fails_before_sending() {
        let draft = EventDraft {
            image_path: Some("/definitely/not/here.png".into()),
            ..EventDraft::default()
        };
        assert!(matches!(event_form(&draft).await, Err(GatewayError::Storage(_))));
    }

    #[test]
    fn image_mime_follows_extension() {
        assert_eq!(image_mime(Path::new("cover.JPG")), "image/jpeg");
        assert_eq!(image_mime(Path::new("cover")), "application/octet-stream");
    }
}
