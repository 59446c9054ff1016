use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MemberSnapshot, PropertySnapshot, Record};

record_status! {
    /// Rental lifecycle status
    RentalStatus {
        Pending => "PENDING",
        Confirmed => "CONFIRMED",
        Cancelled => "CANCELLED",
        Finished => "FINISHED",
    }
}

/// Rental agreement between a renter and a listing owner.
///
/// `property_data`, `renter_data` and `owner_data` are populated snapshots; the
/// backend may omit any of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    #[serde(rename = "_id")]
    pub id: String,
    pub rental_status: RentalStatus,
    pub property_id: String,
    pub renter_id: String,
    pub owner_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub property_data: Option<PropertySnapshot>,
    pub renter_data: Option<MemberSnapshot>,
    pub owner_data: Option<MemberSnapshot>,
}

impl Record for Rental {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_status: Option<RentalStatus>,
}
