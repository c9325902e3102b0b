// Wire schemas
//
// JSON arriving from the backend is decoded into these DTOs and then checked
// while converting into domain entities. Anything that does not fit the
// domain model becomes `GatewayError::Schema`; nothing is silently defaulted
// except the fields the backend is documented to omit.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use eventora_domain::{
    total_pages, Booking, BookingDraft, BookingStatus, Event, EventCategory, EventStatus,
    ExtraItem, GatewayError, Money, Page, User, UserDraft, UserRole, Vendor, VendorDraft,
};

fn schema_error(what: impl std::fmt::Display) -> GatewayError {
    GatewayError::Schema(what.to_string())
}

/// Decodes a list body that is either `{data, totalPages, totalItems}` or a bare array.
pub fn decode_page<D, T>(body: Value, limit: u32) -> Result<Page<T>, GatewayError>
where
    D: DeserializeOwned + TryInto<T, Error = GatewayError>,
{
    let (items, reported_pages, reported_total) = match body {
        Value::Array(items) => (items, None, None),
        Value::Object(mut map) => {
            let items = match map.remove("data") {
                Some(Value::Array(items)) => items,
                Some(_) => return Err(schema_error("`data` is not an array")),
                None => return Err(schema_error("missing `data` in list response")),
            };
            let pages = map.get("totalPages").and_then(Value::as_u64);
            let total = map.get("totalItems").and_then(Value::as_u64);
            (items, pages, total)
        }
        other => return Err(schema_error(format!("unexpected list body: {other}"))),
    };

    let data = items
        .into_iter()
        .map(|item| decode::<D>(item)?.try_into())
        .collect::<Result<Vec<T>, _>>()?;
    let total_items = reported_total.unwrap_or(data.len() as u64);
    let total_pages = match reported_pages {
        Some(pages) => u32::try_from(pages.max(1)).unwrap_or(u32::MAX),
        None => total_pages(total_items, limit),
    };
    Ok(Page {
        data,
        total_pages,
        total_items,
    })
}

/// Decodes a single entity, unwrapping a `{data: ...}` envelope when present.
pub fn decode_one<D, T>(body: Value) -> Result<T, GatewayError>
where
    D: DeserializeOwned + TryInto<T, Error = GatewayError>,
{
    let body = match body {
        Value::Object(mut map)
            if map.contains_key("data") && !map.contains_key("_id") && !map.contains_key("id") =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    decode::<D>(body)?.try_into()
}

pub fn decode<D: DeserializeOwned>(value: Value) -> Result<D, GatewayError> {
    serde_json::from_value(value).map_err(schema_error)
}

// Backend references may be a bare id or a populated document.
fn reference_id(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(id) => Some(id).filter(|id| !id.trim().is_empty()),
        Value::Object(map) => map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(Value::as_str)
            .map(ToString::to_string),
        _ => None,
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, GatewayError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| schema_error(format!("invalid date '{value}'")))
}

fn parse_time(value: Option<String>) -> Result<Option<NaiveTime>, GatewayError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value.trim(), "%H:%M:%S"))
        .map(Some)
        .map_err(|_| schema_error(format!("invalid time '{value}'")))
}

fn money(field: &str, value: f64) -> Result<Money, GatewayError> {
    let amount = Money::from_decimal(value).map_err(schema_error)?;
    if amount.is_negative() {
        return Err(schema_error(format!("{field} must not be negative")));
    }
    Ok(amount)
}

fn optional_money(field: &str, value: Option<f64>) -> Result<Option<Money>, GatewayError> {
    value.map(|value| money(field, value)).transpose()
}

// Documents may carry `_id`, `id` or both (virtuals); `_id` wins.
fn identifier(mongo_id: Option<String>, id: Option<String>) -> Result<String, GatewayError> {
    mongo_id
        .into_iter()
        .chain(id)
        .find(|id| !id.trim().is_empty())
        .ok_or_else(|| schema_error("missing `_id`"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraItemDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing)]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing)]
    pub qty: Option<u32>,
}

impl TryFrom<ExtraItemDto> for ExtraItem {
    type Error = GatewayError;

    fn try_from(dto: ExtraItemDto) -> Result<Self, Self::Error> {
        Ok(ExtraItem {
            name: dto.name,
            unit_price: optional_money("extra item price", dto.price.or(dto.unit_price))?,
            quantity: dto.quantity.or(dto.qty),
        })
    }
}

impl From<&ExtraItem> for ExtraItemDto {
    fn from(item: &ExtraItem) -> Self {
        Self {
            name: item.name.clone(),
            price: item.unit_price.map(|price| price.as_decimal()),
            unit_price: None,
            quantity: item.quantity,
            qty: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub extra_items: Vec<ExtraItemDto>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub created_by: Option<Value>,
    #[serde(default)]
    pub owner: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<EventDto> for Event {
    type Error = GatewayError;

    fn try_from(dto: EventDto) -> Result<Self, Self::Error> {
        let category: EventCategory = dto.category.parse().map_err(schema_error)?;
        let status = match dto.status.as_deref() {
            Some(status) if !status.trim().is_empty() => status.parse().map_err(schema_error)?,
            _ => EventStatus::default(),
        };
        let extra_items = dto
            .extra_items
            .into_iter()
            .map(ExtraItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let owner = reference_id(dto.user)
            .or_else(|| reference_id(dto.created_by))
            .or_else(|| reference_id(dto.owner));
        Ok(Event {
            id: identifier(dto.mongo_id, dto.id)?.into(),
            title: dto.title,
            category,
            date: parse_date(&dto.date)?,
            time: parse_time(dto.time)?,
            location: dto.location,
            description: dto.description.filter(|text| !text.trim().is_empty()),
            base_price: money("basePrice", dto.base_price)?,
            status,
            extra_items,
            image: dto.image.filter(|image| !image.trim().is_empty()),
            owner: owner.map(Into::into),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorDto {
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub starting_price: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<VendorDto> for Vendor {
    type Error = GatewayError;

    fn try_from(dto: VendorDto) -> Result<Self, Self::Error> {
        let service_type = dto
            .service_type
            .or(dto.category)
            .or(dto.service)
            .ok_or_else(|| schema_error("vendor without `serviceType`"))?;
        Ok(Vendor {
            id: identifier(dto.mongo_id, dto.id)?.into(),
            name: dto.name,
            service_type,
            email: dto.email,
            phone: dto.phone,
            location: dto.location,
            starting_price: optional_money("startingPrice", dto.starting_price.or(dto.price))?,
            description: dto.description,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorBody<'a> {
    pub name: &'a str,
    pub service_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> From<&'a VendorDraft> for VendorBody<'a> {
    fn from(draft: &'a VendorDraft) -> Self {
        Self {
            name: draft.name.trim(),
            service_type: draft.service_type.trim(),
            email: draft.email.as_deref(),
            phone: draft.phone.as_deref(),
            location: draft.location.as_deref(),
            starting_price: draft.starting_price.map(|price| price.as_decimal()),
            description: draft.description.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserDto> for User {
    type Error = GatewayError;

    fn try_from(dto: UserDto) -> Result<Self, Self::Error> {
        let role = match dto.role.as_deref() {
            Some(role) if !role.trim().is_empty() => role.parse().map_err(schema_error)?,
            _ => UserRole::default(),
        };
        Ok(User {
            id: identifier(dto.mongo_id, dto.id)?.into(),
            name: dto.name,
            email: dto.email,
            role,
            created_at: dto.created_at,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
}

impl<'a> From<&'a UserDraft> for UserBody<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name.trim(),
            email: draft.email.trim(),
            role: draft.role.as_str(),
            password: draft.password.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub event: Value,
    pub user: Value,
    #[serde(default)]
    pub vendor: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub booked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<BookingDto> for Booking {
    type Error = GatewayError;

    fn try_from(dto: BookingDto) -> Result<Self, Self::Error> {
        let event = reference_id(Some(dto.event)).ok_or_else(|| schema_error("booking without event"))?;
        let user = reference_id(Some(dto.user)).ok_or_else(|| schema_error("booking without user"))?;
        let status = match dto.status.as_deref() {
            Some(status) if !status.trim().is_empty() => status.parse().map_err(schema_error)?,
            _ => BookingStatus::default(),
        };
        Ok(Booking {
            id: identifier(dto.mongo_id, dto.id)?.into(),
            event: event.into(),
            user: user.into(),
            vendor: reference_id(dto.vendor).map(Into::into),
            status,
            guests: dto.guests.or(dto.guest_count).unwrap_or(0),
            booked_at: dto.booked_at.or(dto.created_at),
            amount: optional_money("amount", dto.amount.or(dto.total_amount))?,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingBody<'a> {
    pub event: Option<&'a str>,
    pub user: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<&'a str>,
    pub status: &'static str,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}

impl<'a> From<&'a BookingDraft> for BookingBody<'a> {
    fn from(draft: &'a BookingDraft) -> Self {
        Self {
            event: draft.event.as_ref().map(|id| id.as_str()),
            user: draft.user.as_ref().map(|id| id.as_str()),
            vendor: draft.vendor.as_ref().map(|id| id.as_str()),
            status: draft.status.as_str(),
            guests: draft.guests,
            amount: draft.amount.map(|amount| amount.as_decimal()),
            notes: draft.notes.as_deref(),
        }
    }
}

/// Body of `/auth/login` and `/auth/register` responses.
#[derive(Debug, Deserialize)]
pub struct AuthResponseDto {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserDto>,
}
