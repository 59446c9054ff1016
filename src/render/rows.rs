use super::table::{Assets, DEFAULT_MEMBER_IMAGE, DEFAULT_PROPERTY_IMAGE, PLACEHOLDER};
use crate::models::{Article, Comment, Member, MemberSnapshot, Property, Rental};

const DATE_FORMAT: &str = "%Y-%m-%d";
const CONTENT_PREVIEW: usize = 40;

/// How a record appears as one table row
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self, assets: &Assets) -> Vec<String>;
}

fn or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

fn nick(member: Option<&MemberSnapshot>) -> String {
    or_dash(member.and_then(|m| m.member_nick.as_deref()))
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(CONTENT_PREVIEW).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

impl TableRow for Rental {
    const HEADERS: &'static [&'static str] = &[
        "RENTAL ID", "VEHICLE", "IMAGE", "RENTER", "OWNER", "PERIOD", "TOTAL", "STATUS",
    ];

    fn cells(&self, assets: &Assets) -> Vec<String> {
        let property = self.property_data.as_ref();
        vec![
            self.id.clone(),
            or_dash(property.and_then(|p| p.property_title.as_deref())),
            assets.image_or(
                property.and_then(|p| p.property_images.first().map(String::as_str)),
                DEFAULT_PROPERTY_IMAGE,
            ),
            nick(self.renter_data.as_ref()),
            nick(self.owner_data.as_ref()),
            format!(
                "{} ~ {}",
                self.start_date.format(DATE_FORMAT),
                self.end_date.format(DATE_FORMAT)
            ),
            format!("${:.2}", self.total_price),
            self.rental_status.to_string(),
        ]
    }
}

impl TableRow for Member {
    const HEADERS: &'static [&'static str] = &[
        "MEMBER ID", "IMAGE", "NICK", "FULL NAME", "PHONE", "TYPE", "STATUS",
    ];

    fn cells(&self, assets: &Assets) -> Vec<String> {
        vec![
            self.id.clone(),
            assets.image_or(self.member_image.as_deref(), DEFAULT_MEMBER_IMAGE),
            self.member_nick.clone(),
            or_dash(self.member_full_name.as_deref()),
            self.member_phone.clone(),
            self.member_type.to_string(),
            self.member_status.to_string(),
        ]
    }
}

impl TableRow for Property {
    const HEADERS: &'static [&'static str] = &[
        "LISTING ID", "IMAGE", "TITLE", "PRICE", "OWNER", "LOCATION", "TYPE", "STATUS",
    ];

    fn cells(&self, assets: &Assets) -> Vec<String> {
        vec![
            self.id.clone(),
            assets.image_or(
                self.property_images.first().map(String::as_str),
                DEFAULT_PROPERTY_IMAGE,
            ),
            self.property_title.clone(),
            format!("${:.2}", self.property_price),
            nick(self.member_data.as_ref()),
            self.property_location.clone(),
            self.property_type.to_string(),
            self.property_status.to_string(),
        ]
    }
}

impl TableRow for Article {
    const HEADERS: &'static [&'static str] = &[
        "ARTICLE ID", "CATEGORY", "TITLE", "WRITER", "VIEWS", "LIKES", "STATUS",
    ];

    fn cells(&self, _assets: &Assets) -> Vec<String> {
        vec![
            self.id.clone(),
            self.article_category.to_string(),
            preview(&self.article_title),
            nick(self.member_data.as_ref()),
            self.article_views.to_string(),
            self.article_likes.to_string(),
            self.article_status.to_string(),
        ]
    }
}

impl TableRow for Comment {
    const HEADERS: &'static [&'static str] = &[
        "COMMENT ID", "GROUP", "CONTENT", "WRITER", "DATE", "STATUS",
    ];

    fn cells(&self, _assets: &Assets) -> Vec<String> {
        vec![
            self.id.clone(),
            self.comment_group.to_string(),
            preview(&self.comment_content),
            nick(self.member_data.as_ref()),
            self.created_at.format(DATE_FORMAT).to_string(),
            self.comment_status.to_string(),
        ]
    }
}
