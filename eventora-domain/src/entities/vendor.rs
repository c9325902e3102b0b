// Vendor entity
// A supplier (caterer, florist, venue...) that can be attached to bookings.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Money, VendorId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub service_type: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub starting_price: Option<Money>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorDraft {
    pub name: String,
    pub service_type: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub starting_price: Option<Money>,
    pub description: Option<String>,
}
