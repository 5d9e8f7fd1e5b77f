use crate::domain::record::Record;
use crate::shared::list_utils::{filter_by_status, filter_list, paginate, PageSlice};

/// Search, status filter and page of a list screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub search: String,
    pub status: Option<String>,
    pub page: usize,
}

impl ListState {
    /// Changing the search restarts from the first page.
    pub fn set_search(&mut self, search: String) {
        if self.search != search {
            self.search = search;
            self.page = 0;
        }
    }

    /// Blank selects every status. Restarts from the first page.
    pub fn set_status(&mut self, status: &str) {
        let status = Some(status.trim().to_string()).filter(|s| !s.is_empty());
        if self.status != status {
            self.status = status;
            self.page = 0;
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn apply(&self, records: &[Record], page_size: usize) -> PageSlice<Record> {
        let matching = filter_by_status(filter_list(records, &self.search), self.status.as_deref());
        paginate(&matching, self.page, page_size)
    }
}
