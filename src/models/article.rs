use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MemberSnapshot, Record};

record_status! {
    /// Community board category
    ArticleCategory {
        Free => "FREE",
        Recommend => "RECOMMEND",
        News => "NEWS",
        Humor => "HUMOR",
    }
}

record_status! {
    ArticleStatus {
        Active => "ACTIVE",
        Delete => "DELETE",
    }
}

/// Community board article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub article_category: ArticleCategory,
    pub article_status: ArticleStatus,
    pub article_title: String,
    pub article_content: String,
    pub article_image: Option<String>,
    #[serde(default)]
    pub article_views: i64,
    #[serde(default)]
    pub article_likes: i64,
    #[serde(default)]
    pub article_comments: i64,
    pub member_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_data: Option<MemberSnapshot>,
}

impl Record for Article {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_status: Option<ArticleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_category: Option<ArticleCategory>,
}
