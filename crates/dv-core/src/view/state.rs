use serde::{Deserialize, Serialize};

use super::{compute_displayed, SortOption};
use crate::document::DocumentEntry;
use crate::ids::StorageKey;

/// Loading phase of a document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPhase {
    Loading,
    Ready,
}

/// Generation token handed out when a refresh starts.
///
/// Only the most recently issued ticket may apply its listing; anything older
/// that resolves later is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Stale,
}

/// Per-session document view state.
/// 单个会话的文档视图状态。
///
/// `raw_entries` is the source of truth; `displayed_entries` is always the
/// result of [`compute_displayed`] over the current raw entries, query and
/// sort option, and is recomputed after every mutation.
#[derive(Debug, Clone)]
pub struct ViewState {
    raw_entries: Vec<DocumentEntry>,
    search_query: String,
    sort_option: SortOption,
    displayed_entries: Vec<DocumentEntry>,
    phase: ViewPhase,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            raw_entries: Vec::new(),
            search_query: String::new(),
            sort_option: SortOption::None,
            displayed_entries: Vec::new(),
            phase: ViewPhase::Loading,
            generation: 0,
        }
    }

    pub fn raw_entries(&self) -> &[DocumentEntry] {
        &self.raw_entries
    }

    pub fn displayed_entries(&self) -> &[DocumentEntry] {
        &self.displayed_entries
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn find(&self, key: &StorageKey) -> Option<&DocumentEntry> {
        self.raw_entries.iter().find(|e| &e.storage_key == key)
    }

    /// Enters `Loading` and issues a ticket that supersedes all earlier ones.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.phase = ViewPhase::Loading;
        RefreshTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Replaces the raw listing wholesale if `ticket` is still current.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        entries: Vec<DocumentEntry>,
    ) -> RefreshOutcome {
        if !self.is_current(ticket) {
            return RefreshOutcome::Stale;
        }
        self.raw_entries = entries;
        self.phase = ViewPhase::Ready;
        self.recompute();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            generation = ticket.0,
            raw = self.raw_entries.len(),
            displayed = self.displayed_entries.len(),
            "document view refreshed"
        );

        RefreshOutcome::Applied
    }

    /// A failed listing leaves the view ready but empty.
    pub fn fail_refresh(&mut self, ticket: RefreshTicket) -> RefreshOutcome {
        self.complete_refresh(ticket, Vec::new())
    }

    /// Drops everything and invalidates any in-flight refresh.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.raw_entries.clear();
        self.displayed_entries.clear();
        self.phase = ViewPhase::Ready;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.recompute();
    }

    pub fn set_sort_option(&mut self, sort_option: SortOption) {
        self.sort_option = sort_option;
        self.recompute();
    }

    /// Removes the entry stored under `key` after its remote deletion succeeded.
    ///
    /// Matching is by storage key. Two documents that share a display name are
    /// distinct entries and only the addressed one goes away.
    pub fn remove_entry(&mut self, key: &StorageKey) -> Option<DocumentEntry> {
        let index = self.raw_entries.iter().position(|e| &e.storage_key == key)?;
        let removed = self.raw_entries.remove(index);
        self.displayed_entries.retain(|e| &e.storage_key != key);
        Some(removed)
    }

    /// Re-keys an entry after a confirmed move, keeping its position and
    /// creation time.
    pub fn rename_entry(&mut self, from: &StorageKey, to: StorageKey) -> bool {
        match self.raw_entries.iter_mut().find(|e| &e.storage_key == from) {
            Some(entry) => {
                entry.storage_key = to;
                self.recompute();
                true
            }
            None => false,
        }
    }

    fn recompute(&mut self) {
        self.displayed_entries =
            compute_displayed(&self.raw_entries, &self.search_query, self.sort_option);
    }
}
