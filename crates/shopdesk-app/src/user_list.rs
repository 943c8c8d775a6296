//! Admin user list: base collection, filter inputs and the derived view

use shopdesk_core::{filter_users, FilterCriteria, FilterField, UserListItem};

use crate::request::{RequestId, RequestSeq};

pub const MSG_TOKEN_MISSING: &str = "Token is missing.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch users.";
pub const MSG_FETCH_ERROR: &str = "Error fetching users.";

/// How a list fetch failed, as far as the message shown is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFailure {
    /// The server answered with a non-2xx status
    Http,
    /// Network, timeout or undecodable body
    Transport,
}

impl ListFailure {
    pub fn message(&self) -> &'static str {
        match self {
            ListFailure::Http => MSG_FETCH_FAILED,
            ListFailure::Transport => MSG_FETCH_ERROR,
        }
    }
}

#[derive(Debug, Default)]
pub struct UserListState {
    /// Everything the last successful fetch returned
    pub base: Vec<UserListItem>,
    /// `base` filtered by `criteria`; never edited directly
    pub displayed: Vec<UserListItem>,
    pub criteria: FilterCriteria,
    /// Filter input receiving keystrokes
    pub focus: FilterField,
    pub error: Option<String>,
    pub loading: bool,
    /// Highlighted row in `displayed`
    pub selected: Option<usize>,
    seq: RequestSeq,
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> RequestId {
        self.loading = true;
        self.error = None;
        self.seq.next_id()
    }

    pub fn is_current(&self, request: RequestId) -> bool {
        self.seq.is_current(request)
    }

    pub fn token_missing(&mut self) {
        self.seq.invalidate();
        self.fail_with(MSG_TOKEN_MISSING);
    }

    pub fn loaded(&mut self, users: Vec<UserListItem>) {
        self.loading = false;
        self.error = None;
        self.base = users;
        self.recompute_filter();
    }

    pub fn load_failed(&mut self, failure: ListFailure) {
        self.fail_with(failure.message());
    }

    fn fail_with(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_string());
        self.base.clear();
        self.recompute_filter();
    }

    /// Set one criterion and rebuild the view.
    pub fn set_criterion(&mut self, field: FilterField, value: String) {
        self.criteria.set(field, value);
        self.recompute_filter();
    }

    /// Rebuild `displayed` from `base` and keep the selection in range.
    pub fn recompute_filter(&mut self) {
        self.displayed = filter_users(&self.base, &self.criteria);
        self.selected = match (self.selected, self.displayed.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            if i + 1 < self.displayed.len() {
                self.selected = Some(i + 1);
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn select_first(&mut self) {
        if !self.displayed.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.displayed.is_empty() {
            self.selected = Some(self.displayed.len() - 1);
        }
    }

    pub fn selected_user(&self) -> Option<&UserListItem> {
        self.selected.and_then(|i| self.displayed.get(i))
    }
}
