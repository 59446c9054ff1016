use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of statuses (or categories) a backend record can carry.
pub trait RecordStatus: Copy + Eq + Serialize + fmt::Debug + Send + Sync + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Wire value of the variant
    fn as_str(self) -> &'static str;
}

/// Statuses offered in a row's status menu: every status except the current one.
///
/// Transitions are authorized server-side, the client only lists the choices.
pub fn status_choices<S: RecordStatus>(current: S) -> Vec<S> {
    S::ALL.iter().copied().filter(|s| *s != current).collect()
}

macro_rules! record_status {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum $name {
            $($variant,)+
        }

        impl $crate::models::RecordStatus for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::models::RecordStatus::as_str(*self))
            }
        }
    };
}

pub mod article;
pub mod comment;
pub mod member;
pub mod property;
pub mod rental;

pub use article::{Article, ArticleCategory, ArticleStatus, ArticleUpdate};
pub use comment::{Comment, CommentGroup, CommentStatus, CommentUpdate};
pub use member::{Member, MemberSnapshot, MemberStatus, MemberType, MemberUpdate};
pub use property::{Property, PropertySnapshot, PropertyStatus, PropertyType, PropertyUpdate};
pub use rental::{Rental, RentalStatus, RentalUpdate};

/// A backend-owned record the admin pages list and act on
pub trait Record: DeserializeOwned + Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Single `{ total }` entry of a `metaCounter` array
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaCounter {
    pub total: u64,
}

/// One page of records plus the total matching the current search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub list: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta_counter: Vec<MetaCounter>,
}

impl<T> Paginated<T> {
    pub fn new(list: Vec<T>, total: u64) -> Self {
        Self {
            list,
            total_count: Some(total),
            meta_counter: Vec::new(),
        }
    }

    /// Total across all pages; an empty `metaCounter` means nothing matched.
    pub fn total_count(&self) -> u64 {
        self.total_count
            .or_else(|| self.meta_counter.first().map(|m| m.total))
            .unwrap_or(0)
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}
