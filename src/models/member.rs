use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

record_status! {
    /// Account role
    MemberType {
        User => "USER",
        Agent => "AGENT",
        Admin => "ADMIN",
    }
}

record_status! {
    /// Account status
    MemberStatus {
        Active => "ACTIVE",
        Block => "BLOCK",
        Delete => "DELETE",
    }
}

/// Marketplace member account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub member_type: MemberType,
    pub member_status: MemberStatus,
    pub member_phone: String,
    pub member_nick: String,
    pub member_full_name: Option<String>,
    pub member_image: Option<String>,
    pub member_address: Option<String>,
    #[serde(default)]
    pub member_properties: i64,
    #[serde(default)]
    pub member_articles: i64,
    #[serde(default)]
    pub member_points: i64,
    #[serde(default)]
    pub member_likes: i64,
    #[serde(default)]
    pub member_views: i64,
    #[serde(default)]
    pub member_warnings: i64,
    #[serde(default)]
    pub member_blocks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Populated copy of a member embedded in another record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberSnapshot {
    #[serde(rename = "_id")]
    pub id: String,
    pub member_nick: Option<String>,
    pub member_full_name: Option<String>,
    pub member_image: Option<String>,
    pub member_phone: Option<String>,
}

/// Admin update payload; unset fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<MemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_status: Option<MemberStatus>,
}
