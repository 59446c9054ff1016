use serde_json::Value;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

use super::dialogs::Dialogs;
use super::inquiry::{Direction, Inquiry, Search, StatusTab};
use super::menu::RowMenus;
use crate::error::ClientError;
use crate::models::RecordStatus;
use crate::operations::{Input, ListQuery};
use crate::transport::{execute, FetchPolicy, Transport};

pub(super) struct ListState<R> {
    pub(super) inquiry: Inquiry,
    pub(super) list: Vec<R>,
    pub(super) total: u64,
    pub(super) menus: RowMenus<String>,
}

/// Copy of a controller's state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<R> {
    pub inquiry: Inquiry,
    pub list: Vec<R>,
    pub total: u64,
    pub open_menus: Vec<usize>,
}

/// Owns the inquiry of one admin list page and keeps the displayed list in
/// sync with it.
///
/// Every inquiry change issues exactly one fetch. Fetches are not fenced: when
/// several are in flight, the last one to complete wins.
pub struct ListController<Q: ListQuery> {
    pub(super) transport: Arc<dyn Transport>,
    pub(super) dialogs: Arc<dyn Dialogs>,
    state: Mutex<ListState<Q::Record>>,
    query: PhantomData<fn() -> Q>,
}

impl<Q: ListQuery> ListController<Q> {
    pub fn new(transport: Arc<dyn Transport>, dialogs: Arc<dyn Dialogs>, inquiry: Inquiry) -> Self {
        Self {
            transport,
            dialogs,
            state: Mutex::new(ListState {
                inquiry,
                list: Vec::new(),
                total: 0,
                menus: RowMenus::default(),
            }),
            query: PhantomData,
        }
    }

    pub(super) fn state(&self) -> MutexGuard<'_, ListState<Q::Record>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initial load of the page
    pub async fn mount(&self) -> Result<(), ClientError> {
        self.fetch().await
    }

    /// Fetch with the current inquiry.
    ///
    /// On success the list and total are replaced; on failure the user is
    /// notified and the previous list stays.
    pub async fn fetch(&self) -> Result<(), ClientError> {
        let inquiry = self.state().inquiry.clone();
        debug!(
            "{} page {} limit {} search {:?}",
            Q::NAME,
            inquiry.page(),
            inquiry.limit(),
            inquiry.search()
        );

        let result = execute::<Q>(
            self.transport.as_ref(),
            &Input::new(inquiry),
            FetchPolicy::NetworkOnly,
        )
        .await;

        match result {
            Ok(output) => {
                let page = Q::into_page(output);
                let mut state = self.state();
                state.total = page.total_count();
                state.list = page.list;
                Ok(())
            }
            Err(e) => {
                warn!("{} failed: {e}", Q::NAME);
                self.dialogs.notify(&e.user_message()).await;
                Err(e)
            }
        }
    }

    async fn change_inquiry(&self, change: impl FnOnce(&mut Inquiry)) -> Result<(), ClientError> {
        change(&mut self.state().inquiry);
        self.fetch().await
    }

    pub async fn change_page(&self, page: u32) -> Result<(), ClientError> {
        self.change_inquiry(|inquiry| inquiry.set_page(page)).await
    }

    /// Rows-per-page change; restarts at page 1
    pub async fn change_rows_per_page(&self, limit: u32) -> Result<(), ClientError> {
        self.change_inquiry(|inquiry| inquiry.set_limit(limit)).await
    }

    pub async fn change_sort(
        &self,
        sort: impl Into<String>,
        direction: Direction,
    ) -> Result<(), ClientError> {
        let sort = sort.into();
        self.change_inquiry(|inquiry| inquiry.set_sort(sort, direction))
            .await
    }

    /// Tab change: `None` deletes the filter key, anything else sets it.
    pub async fn change_tab(&self, key: &str, value: Option<Value>) -> Result<(), ClientError> {
        self.change_inquiry(|inquiry| inquiry.set_filter(key, value))
            .await
    }

    pub async fn change_status_tab<S: RecordStatus>(
        &self,
        key: &str,
        tab: StatusTab<S>,
    ) -> Result<(), ClientError> {
        self.change_tab(key, tab.filter_value()).await
    }

    pub async fn change_search(&self, search: Search) -> Result<(), ClientError> {
        self.change_inquiry(|inquiry| inquiry.set_search(search))
            .await
    }

    pub fn open_menu(&self, row: usize, anchor: impl Into<String>) {
        self.state().menus.open(row, anchor.into());
    }

    /// Closes every open row menu
    pub fn close_menus(&self) {
        self.state().menus.close_all();
    }

    pub fn inquiry(&self) -> Inquiry {
        self.state().inquiry.clone()
    }

    pub fn total(&self) -> u64 {
        self.state().total
    }

    pub fn snapshot(&self) -> ListSnapshot<Q::Record> {
        let state = self.state();
        ListSnapshot {
            inquiry: state.inquiry.clone(),
            list: state.list.clone(),
            total: state.total,
            open_menus: state.menus.open_rows(),
        }
    }
}
