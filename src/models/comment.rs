use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MemberSnapshot, Record};

record_status! {
    /// Kind of record a comment is attached to
    CommentGroup {
        Member => "MEMBER",
        Article => "ARTICLE",
        Property => "PROPERTY",
    }
}

record_status! {
    CommentStatus {
        Active => "ACTIVE",
        Delete => "DELETE",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment_status: CommentStatus,
    pub comment_group: CommentGroup,
    pub comment_content: String,
    pub comment_ref_id: String,
    pub member_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_data: Option<MemberSnapshot>,
}

impl Record for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_status: Option<CommentStatus>,
}
