//! Resource screen state.
//!
//! Plain data plus synchronous transitions. The async orchestration lives in
//! [`crate::screen`]; views only ever read a snapshot of this struct.

use std::collections::BTreeSet;

use crate::pagination::{self, PagerEdges};
use crate::query::PageQuery;
use crate::resource::{PageResult, Resource};

/// List loading lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Edit dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<E> {
    Closed,
    Open(E),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<E> {
    pub phase: LoadPhase,
    /// Exactly the items of the last applied page
    pub items: Vec<E>,
    /// Intent of the most recent fetch
    pub query: PageQuery,
    pub total_pages: usize,
    pub total_count: usize,
    /// Text in the search box, ahead of the debounced `query.keyword`
    pub search_input: String,
    pub modal: Modal<E>,
    pub selection: BTreeSet<i64>,
    pub submitting: bool,
}

impl<E: Resource> ResourceState<E> {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: LoadPhase::Idle,
            items: Vec::new(),
            query: PageQuery::first(page_size),
            total_pages: 0,
            total_count: 0,
            search_input: String::new(),
            modal: Modal::Closed,
            selection: BTreeSet::new(),
            submitting: false,
        }
    }

    /// Replace list and counters in one step. Selected ids no longer on the
    /// page are dropped.
    pub fn apply_page(&mut self, page: PageResult<E>) {
        self.items = page.items;
        self.total_pages = page.total_pages;
        self.total_count = page.total_count;
        self.phase = LoadPhase::Loaded;
        let visible: BTreeSet<i64> = self.items.iter().map(|item| item.id()).collect();
        self.selection.retain(|id| visible.contains(id));
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn draft(&self) -> Option<&E> {
        match &self.modal {
            Modal::Open(draft) => Some(draft),
            Modal::Closed => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, Modal::Open(_))
    }

    pub fn open_create(&mut self) {
        self.modal = Modal::Open(E::blank());
    }

    pub fn open_edit(&mut self, item: &E) {
        self.modal = Modal::Open(item.clone());
    }

    /// Apply a form edit to the open draft; no-op when closed.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut E)) {
        if let Modal::Open(draft) = &mut self.modal {
            edit(draft);
        }
    }

    /// Discard the draft and the selection.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.selection.clear();
    }

    /// Check/uncheck one row. Ids not on the page are ignored.
    pub fn toggle_selected(&mut self, id: i64) {
        if !self.selection.remove(&id) && self.items.iter().any(|item| item.id() == id) {
            self.selection.insert(id);
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| self.selection.contains(&item.id()))
    }

    /// Header checkbox: select the whole page, or clear if already selected.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection = self.items.iter().map(|item| item.id()).collect();
        }
    }

    pub fn selected_ids(&self) -> Vec<i64> {
        self.selection.iter().copied().collect()
    }

    pub fn edges(&self) -> PagerEdges {
        PagerEdges::new(self.query.page, self.total_pages)
    }

    pub fn row_number(&self, index: usize) -> usize {
        pagination::row_number(self.query.page, self.query.page_size, index)
    }
}
