use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MemberSnapshot, Record};

record_status! {
    /// Vehicle body type
    PropertyType {
        Sedan => "SEDAN",
        Suv => "SUV",
        Hatchback => "HATCHBACK",
        Coupe => "COUPE",
        Truck => "TRUCK",
        Van => "VAN",
    }
}

record_status! {
    /// Listing status
    PropertyStatus {
        Active => "ACTIVE",
        Sold => "SOLD",
        Delete => "DELETE",
    }
}

/// Vehicle listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_type: PropertyType,
    pub property_status: PropertyStatus,
    pub property_location: String,
    pub property_address: String,
    pub property_title: String,
    pub property_brand: Option<String>,
    pub property_model: Option<String>,
    pub property_year: Option<i32>,
    pub property_mileage: Option<i64>,
    pub property_price: f64,
    #[serde(default)]
    pub property_images: Vec<String>,
    pub property_desc: Option<String>,
    #[serde(default)]
    pub property_rent: bool,
    #[serde(default)]
    pub property_views: i64,
    #[serde(default)]
    pub property_likes: i64,
    pub member_id: String,
    pub sold_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_data: Option<MemberSnapshot>,
}

impl Record for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Populated copy of a listing embedded in another record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySnapshot {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_title: Option<String>,
    #[serde(default)]
    pub property_images: Vec<String>,
    pub property_price: Option<f64>,
    pub property_location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_status: Option<PropertyStatus>,
}
