use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::RecordStatus;

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_SORT: &str = "createdAt";

/// Filter keys of an inquiry; an absent key means "match all".
pub type Search = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

/// Pagination, sort and filter parameters of one list fetch.
///
/// `page` and `limit` are always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inquiry {
    page: u32,
    limit: u32,
    sort: String,
    direction: Direction,
    search: Search,
}

impl Default for Inquiry {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Inquiry {
    /// First page, newest first, unfiltered
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            sort: DEFAULT_SORT.to_string(),
            direction: Direction::Desc,
            search: Search::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Rows-per-page change; always restarts at page 1.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: impl Into<String>, direction: Direction) {
        self.sort = sort.into();
        self.direction = direction;
    }

    /// Set or delete one filter key and restart at page 1.
    ///
    /// `None` removes the key entirely so the backend applies no filter.
    pub fn set_filter(&mut self, key: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.search.insert(key.to_string(), value);
            }
            None => {
                self.search.remove(key);
            }
        }
        self.page = 1;
    }

    /// Replace the whole search and restart at page 1
    pub fn set_search(&mut self, search: Search) {
        self.search = search;
        self.page = 1;
    }

    pub fn with_search(mut self, key: &str, value: Value) -> Self {
        self.search.insert(key.to_string(), value);
        self
    }
}

/// Status filter tab of a list page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTab<S> {
    All,
    Only(S),
}

impl<S: RecordStatus> StatusTab<S> {
    /// Filter value for the tab; `All` carries none.
    pub fn filter_value(self) -> Option<Value> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(Value::String(status.as_str().to_string())),
        }
    }

    /// Tabs in display order, `All` first
    pub fn tabs() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(S::ALL.iter().copied().map(Self::Only))
            .collect()
    }
}
