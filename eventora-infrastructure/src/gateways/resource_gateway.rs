// CRUD gateway for the plain collections served under `/{collection}`.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use eventora_domain::{Booking, GatewayError, ListQuery, Page, Resource, ResourceGateway, User, Vendor};

use crate::http::schemas::{
    decode_one, decode_page, BookingBody, BookingDto, UserBody, UserDto, VendorBody, VendorDto,
};
use crate::http::ApiClient;

/// Ties a domain resource to its wire representation.
pub trait WireResource: Resource {
    type Dto: DeserializeOwned + TryInto<Self, Error = GatewayError> + Send;

    fn body(draft: &Self::Draft) -> Result<Value, GatewayError>;
}

fn to_value<T: serde::Serialize>(body: T) -> Result<Value, GatewayError> {
    serde_json::to_value(body).map_err(|err| GatewayError::Schema(err.to_string()))
}

impl WireResource for Vendor {
    type Dto = VendorDto;

    fn body(draft: &Self::Draft) -> Result<Value, GatewayError> {
        to_value(VendorBody::from(draft))
    }
}

impl WireResource for User {
    type Dto = UserDto;

    fn body(draft: &Self::Draft) -> Result<Value, GatewayError> {
        to_value(UserBody::from(draft))
    }
}

impl WireResource for Booking {
    type Dto = BookingDto;

    fn body(draft: &Self::Draft) -> Result<Value, GatewayError> {
        to_value(BookingBody::from(draft))
    }
}

pub struct HttpResourceGateway<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: WireResource> HttpResourceGateway<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: WireResource> ResourceGateway<R> for HttpResourceGateway<R> {
    async fn list(&self, query: &ListQuery) -> Result<Page<R>, GatewayError> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(search) = query.search.as_deref() {
            params.push(("search", search.to_string()));
        }
        let body = self.api.get_json(&[R::COLLECTION], &params).await?;
        decode_page::<R::Dto, R>(body, query.limit)
    }

    async fn get(&self, id: &str) -> Result<R, GatewayError> {
        let body = self.api.get_json(&[R::COLLECTION, id], &[]).await?;
        decode_one::<R::Dto, R>(body)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, GatewayError> {
        let payload = R::body(draft)?;
        let body = self
            .api
            .send_json(Method::POST, &[R::COLLECTION], &payload)
            .await?;
        decode_one::<R::Dto, R>(body)
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<R, GatewayError> {
        let payload = R::body(draft)?;
        let body = self
            .api
            .send_json(Method::PUT, &[R::COLLECTION, id], &payload)
            .await?;
        decode_one::<R::Dto, R>(body)
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.api.delete(&[R::COLLECTION, id]).await
    }
}
