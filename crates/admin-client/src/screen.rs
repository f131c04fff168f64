//! Resource Screen
//!
//! The list + modal CRUD flow shared by every dashboard page:
//!
//! ```text
//! mount / page change / settled search / after mutation
//!        │
//!        ▼
//!   fetch(PageQuery) ── ticket ──► GET getallbypaging
//!        │                               │
//!        │         stale ticket? ◄───────┘
//!        ▼                 │ yes: drop response
//!   apply_page             ▼ no
//!                    replace list + counters, or toast the failure
//! ```
//!
//! Failures never escape: every operation turns them into a toast and
//! leaves the previous list in place.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::notify::{messages, Notifier};
use crate::pagination;
use crate::query::PageQuery;
use crate::resource::{self, DeleteReport, Mutation, Resource, ResourceClient};
use crate::sequence::{Debouncer, Sequence};
use crate::state::{LoadPhase, ResourceState};
use crate::transport::Transport;

type StateListener<E> = Box<dyn Fn(&ResourceState<E>)>;

/// Orchestrates one entity's screen. Views subscribe to state snapshots and
/// call the operations below; nothing else mutates the state.
pub struct ResourceScreen<E: Resource> {
    client: ResourceClient<E>,
    notifier: Rc<dyn Notifier>,
    state: RefCell<ResourceState<E>>,
    requests: Sequence,
    search: Debouncer,
    listener: RefCell<Option<StateListener<E>>>,
}

impl<E: Resource> ResourceScreen<E> {
    pub fn new(transport: Rc<dyn Transport>, notifier: Rc<dyn Notifier>, config: &ClientConfig) -> Self {
        Self {
            client: ResourceClient::new(transport),
            notifier,
            state: RefCell::new(ResourceState::new(config.page_size)),
            requests: Sequence::new(),
            search: Debouncer::new(config.search_debounce),
            listener: RefCell::new(None),
        }
    }

    /// Receive a snapshot after every state change (replaces any previous
    /// listener).
    pub fn subscribe(&self, listener: impl Fn(&ResourceState<E>) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn snapshot(&self) -> ResourceState<E> {
        self.state.borrow().clone()
    }

    pub fn search_delay(&self) -> std::time::Duration {
        self.search.delay()
    }

    /// Mutate state, then notify the listener outside the borrow.
    fn update<R>(&self, change: impl FnOnce(&mut ResourceState<E>) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.borrow_mut();
            let result = change(&mut state);
            (result, state.clone())
        };
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&snapshot);
        }
        result
    }

    fn report_load_failure(&self, err: &ApiError) {
        if err.is_malformed() {
            self.notifier.error(messages::INVALID_DATA);
        } else {
            self.notifier.error(messages::LOAD_FAILED);
        }
    }

    // ========================
    // Fetching
    // ========================

    /// The only path that loads the list. Returns whether the response was
    /// applied (`false` for failures and superseded responses). `query`
    /// changes together with the items, never ahead of them.
    pub async fn fetch(&self, intent: PageQuery) -> bool {
        let ticket = self.requests.issue();
        self.update(|s| s.phase = LoadPhase::Loading);

        let result = self.client.fetch_page(&intent).await;
        if !self.requests.is_latest(ticket) {
            debug!("Dropping stale {} page {}", E::PATH, intent.page);
            return false;
        }

        match result {
            Ok(page) => {
                debug!("{} page {}: {} items", E::PATH, intent.page, page.items.len());
                self.update(|s| {
                    s.query = intent;
                    s.apply_page(page);
                });
                true
            }
            Err(err) => {
                warn!("Loading {} failed: {}", E::PATH, err);
                self.report_load_failure(&err);
                self.update(|s| s.phase = LoadPhase::Failed(err.to_string()));
                false
            }
        }
    }

    /// Re-issue the current intent
    pub async fn refresh(&self) -> bool {
        let intent = self.state.borrow().query.clone();
        self.fetch(intent).await
    }

    /// Go to a page, clamped to the known page count
    pub async fn set_page(&self, page: usize) -> bool {
        let intent = {
            let state = self.state.borrow();
            state.query.with_page(pagination::clamp_page(page, state.total_pages))
        };
        self.fetch(intent).await
    }

    /// Record a keystroke and fetch page 0 once typing pauses for the
    /// debounce delay. `timer` must complete after [`Self::search_delay`].
    /// Returns whether this keystroke triggered the fetch.
    pub async fn search<F: Future<Output = ()>>(&self, keyword: &str, timer: F) -> bool {
        self.update(|s| s.search_input = keyword.to_string());
        if !self.search.settle(timer).await {
            return false;
        }
        let intent = self.state.borrow().query.with_keyword(keyword);
        self.fetch(intent).await
    }

    /// Fetch with the given keyword right away (search button, clear button).
    pub async fn search_now(&self, keyword: &str) -> bool {
        self.search.cancel();
        let intent = self.update(|s| {
            s.search_input = keyword.to_string();
            s.query.with_keyword(keyword)
        });
        self.fetch(intent).await
    }

    // ========================
    // Modal & selection
    // ========================

    pub fn open_create(&self) {
        if !E::CAN_CREATE {
            self.notifier.warning(messages::CREATE_NOT_ALLOWED);
            return;
        }
        self.update(|s| s.open_create());
    }

    pub fn open_edit(&self, item: &E) {
        self.update(|s| s.open_edit(item));
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut E)) {
        self.update(|s| s.edit_draft(edit));
    }

    pub fn close_modal(&self) {
        self.update(|s| s.close_modal());
    }

    pub fn toggle_selected(&self, id: i64) {
        self.update(|s| s.toggle_selected(id));
    }

    pub fn toggle_all(&self) {
        self.update(|s| s.toggle_all());
    }

    // ========================
    // Mutations
    // ========================

    /// Save the open draft. The modal closes and the list reloads only once
    /// the backend confirms; otherwise the draft stays as typed.
    pub async fn submit(&self) -> bool {
        let draft = {
            let state = self.state.borrow();
            if state.submitting {
                return false;
            }
            match state.draft() {
                Some(draft) => draft.clone(),
                None => return false,
            }
        };

        let mutation = Mutation::for_draft(&draft);
        if mutation == Mutation::Create && !E::CAN_CREATE {
            self.notifier.warning(messages::CREATE_NOT_ALLOWED);
            return false;
        }

        self.update(|s| s.submitting = true);
        let toast = self.notifier.loading(messages::SAVING);
        let result = self.client.save(&draft).await;
        self.notifier.dismiss(toast);
        self.update(|s| s.submitting = false);

        match result {
            Ok(Mutation::Create) => self.notifier.success(messages::CREATE_OK),
            Ok(Mutation::Update) => self.notifier.success(messages::UPDATE_OK),
            Err(err) => {
                warn!("Saving {} #{} failed: {}", E::PATH, draft.id(), err);
                self.notifier.error(match mutation {
                    Mutation::Create => messages::CREATE_FAILED,
                    Mutation::Update => messages::UPDATE_FAILED,
                });
                return false;
            }
        }

        self.update(|s| s.close_modal());
        self.refresh().await;
        true
    }

    /// Delete every selected row after `confirm(count)` agrees.
    /// An empty selection only warns.
    pub async fn bulk_delete(&self, confirm: impl FnOnce(usize) -> bool) -> Option<DeleteReport> {
        if !E::CAN_DELETE {
            return None;
        }
        let ids = self.state.borrow().selected_ids();
        if ids.is_empty() {
            self.notifier.warning(messages::SELECT_TO_DELETE);
            return None;
        }
        if !confirm(ids.len()) {
            debug!("Delete of {} {} rows declined", ids.len(), E::PATH);
            return None;
        }

        let report = match self.client.delete_many(&ids).await {
            Ok(report) => report,
            Err(err) => {
                warn!("Deleting {:?} from {} failed: {}", ids, E::PATH, err);
                self.notifier.error(messages::DELETE_FAILED);
                return None;
            }
        };

        if report.is_fully_blocked() {
            self.notifier.error(messages::DELETE_BLOCKED);
        } else if report.blocked > 0 {
            self.notifier
                .warning(&messages::partially_deleted(report.deleted, report.blocked));
        } else {
            self.notifier.success(&messages::deleted(report.deleted));
        }

        self.update(|s| s.selection.clear());
        self.refresh().await;
        Some(report)
    }

    /// Load a lookup list (`{resource}/getall`), e.g. books for a picker.
    /// `None` after a failure, which has already been reported.
    pub async fn load_lookup<T: DeserializeOwned>(&self, resource: &str) -> Option<Vec<T>> {
        match resource::list_all(self.client.transport().as_ref(), resource).await {
            Ok(items) => Some(items),
            Err(err) => {
                warn!("Loading {} lookup failed: {}", resource, err);
                self.report_load_failure(&err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Category, Order};
    use crate::notify::ToastKind;
    use crate::testing::{FakeTransport, RecordingNotifier};
    use crate::transport::Method;
    use serde_json::json;
    use std::cell::Cell;
    use std::time::Duration;

    struct Harness<E: Resource> {
        transport: Rc<FakeTransport>,
        notifier: Rc<RecordingNotifier>,
        screen: ResourceScreen<E>,
    }

    fn harness<E: Resource>() -> Harness<E> {
        let transport = Rc::new(FakeTransport::new());
        let notifier = Rc::new(RecordingNotifier::new());
        let screen = ResourceScreen::new(transport.clone(), notifier.clone(), &ClientConfig::default());
        Harness { transport, notifier, screen }
    }

    fn categories(ids: &[i64], total_pages: usize) -> serde_json::Value {
        let items: Vec<_> = ids
            .iter()
            .map(|id| json!({ "id": id, "name": format!("C{}", id), "isLeaf": false }))
            .collect();
        json!({ "items": items, "page": 0, "totalPages": total_pages, "totalCount": ids.len() })
    }

    async fn loaded(ids: &[i64]) -> Harness<Category> {
        let h = harness::<Category>();
        h.transport.push(Ok(categories(ids, 2)));
        assert!(h.screen.refresh().await);
        h
    }

    #[tokio::test]
    async fn test_fetch_replaces_list_and_counters() {
        let h = harness::<Category>();
        let seen = Rc::new(Cell::new(0usize));
        let counter = seen.clone();
        h.screen.subscribe(move |s| {
            if s.phase == LoadPhase::Loaded {
                counter.set(s.items.len());
            }
        });

        h.transport.push(Ok(categories(&[1, 2, 3], 4)));
        assert!(h.screen.refresh().await);

        let state = h.screen.snapshot();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.total_pages, 4);
        assert_eq!(state.total_count, 3);
        assert_eq!(seen.get(), 3);
        assert_eq!(h.transport.paths(), vec!["GET Category/getallbypaging?page=0&pageSize=8&keyword="]);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_list() {
        let h = loaded(&[1, 2]).await;

        h.transport.push(Err(ApiError::Network("offline".into())));
        assert!(!h.screen.set_page(1).await);
        let state = h.screen.snapshot();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.query.page, 0);
        assert_eq!(state.row_number(0), 1);
        assert!(matches!(state.phase, LoadPhase::Failed(_)));
        assert_eq!(h.notifier.last(), Some((ToastKind::Error, messages::LOAD_FAILED.to_string())));

        h.transport.push(Ok(json!({ "rows": [] })));
        assert!(!h.screen.refresh().await);
        assert_eq!(h.screen.snapshot().items.len(), 2);
        assert_eq!(h.notifier.last(), Some((ToastKind::Error, messages::INVALID_DATA.to_string())));
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous_keyword() {
        let h = loaded(&[1, 2]).await;

        h.transport.push(Err(ApiError::Network("offline".into())));
        assert!(!h.screen.search_now("sách").await);
        let state = h.screen.snapshot();
        assert_eq!(state.query.keyword, "");
        assert_eq!(state.search_input, "sách");

        h.screen.refresh().await;
        let last = h.transport.paths().pop().unwrap();
        assert!(!last.contains("keyword=s"), "{}", last);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let h = harness::<Category>();
        h.transport.push_delayed(Duration::from_millis(30), Ok(categories(&[1], 3)));
        h.transport.push_delayed(Duration::from_millis(1), Ok(categories(&[2], 3)));

        let (first, second) = tokio::join!(
            h.screen.fetch(PageQuery { page: 0, page_size: 8, keyword: String::new() }),
            h.screen.fetch(PageQuery { page: 1, page_size: 8, keyword: String::new() }),
        );

        assert!(!first);
        assert!(second);
        let state = h.screen.snapshot();
        assert_eq!(state.items[0].id, 2);
        assert_eq!(state.query.page, 1);
    }

    #[tokio::test]
    async fn test_set_page_is_clamped() {
        let h = loaded(&[1]).await;
        h.screen.set_page(40).await;
        assert_eq!(h.screen.snapshot().query.page, 1);
    }

    #[tokio::test]
    async fn test_create_draft_posts_then_reloads() {
        let h = loaded(&[1]).await;
        h.screen.open_create();
        h.screen.edit_draft(|d| d.name = "Test".into());

        h.transport.push(Ok(json!({ "id": 10 })));
        assert!(h.screen.submit().await);

        let calls = h.transport.calls();
        assert_eq!(calls[1].method, Method::Post);
        assert_eq!(calls[1].path, "Category/create");
        assert_eq!(calls[1].body, Some(json!({ "Name": "Test", "IsLeaf": false })));
        assert_eq!(calls[2].method, Method::Get);
        assert!(!h.screen.snapshot().is_modal_open());
        assert!(h.notifier.toasts().contains(&(ToastKind::Success, messages::CREATE_OK.to_string())));
    }

    #[tokio::test]
    async fn test_existing_draft_puts_update() {
        let h = loaded(&[5]).await;
        let row = h.screen.snapshot().items[0].clone();
        h.screen.open_edit(&row);
        h.screen.edit_draft(|d| d.name = "Test".into());

        h.transport.push(Ok(json!(true)));
        assert!(h.screen.submit().await);

        let put = &h.transport.calls()[1];
        assert_eq!(put.method, Method::Put);
        assert_eq!(put.path, "Category/update");
        assert_eq!(put.body.as_ref().map(|b| b["Id"].clone()), Some(json!(5)));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_modal_and_draft() {
        let h = loaded(&[1]).await;
        h.screen.open_create();
        h.screen.edit_draft(|d| d.name = "Giữ lại".into());

        h.transport.push(Err(ApiError::Status { status: 400, body: "bad".into() }));
        assert!(!h.screen.submit().await);

        let state = h.screen.snapshot();
        assert_eq!(state.draft().map(|d| d.name.as_str()), Some("Giữ lại"));
        assert!(!state.submitting);
        assert_eq!(h.transport.calls().len(), 2);
        assert_eq!(h.notifier.last(), Some((ToastKind::Error, messages::CREATE_FAILED.to_string())));
    }

    #[tokio::test]
    async fn test_unacknowledged_submit_is_a_failure() {
        let h = loaded(&[1]).await;
        h.screen.open_create();
        h.transport.push(Ok(serde_json::Value::Null));
        assert!(!h.screen.submit().await);
        assert!(h.screen.snapshot().is_modal_open());
    }

    #[tokio::test]
    async fn test_loading_toast_is_dismissed() {
        let h = loaded(&[1]).await;
        h.screen.open_create();
        h.transport.push(Ok(json!(1)));
        h.screen.submit().await;
        assert_eq!(h.notifier.toasts()[0], (ToastKind::Loading, messages::SAVING.to_string()));
        assert_eq!(h.notifier.dismissed(), vec![1]);
    }

    #[tokio::test]
    async fn test_empty_selection_only_warns() {
        let h = loaded(&[1, 2]).await;
        let asked = Cell::new(false);
        let report = h.screen.bulk_delete(|_| {
            asked.set(true);
            true
        }).await;

        assert!(report.is_none());
        assert!(!asked.get());
        assert_eq!(h.transport.calls().len(), 1);
        assert_eq!(h.notifier.last(), Some((ToastKind::Warning, messages::SELECT_TO_DELETE.to_string())));
    }

    #[tokio::test]
    async fn test_bulk_delete_confirmed() {
        let h = loaded(&[1, 2, 3]).await;
        h.screen.toggle_all();

        h.transport.push(Ok(json!([3])));
        let report = h.screen.bulk_delete(|count| count == 3).await.unwrap();

        assert_eq!(report.deleted, 3);
        let paths = h.transport.paths();
        assert_eq!(paths[1], "DELETE Category/deletemulti?checkedList=%5B1%2C2%2C3%5D");
        assert!(paths[2].starts_with("GET Category/getallbypaging"));
        assert!(h.screen.snapshot().selection.is_empty());
        assert!(h.notifier.toasts().contains(&(ToastKind::Success, messages::deleted(3))));
    }

    #[tokio::test]
    async fn test_bulk_delete_declined() {
        let h = loaded(&[1]).await;
        h.screen.toggle_selected(1);
        assert!(h.screen.bulk_delete(|_| false).await.is_none());
        assert_eq!(h.transport.calls().len(), 1);
        assert_eq!(h.screen.snapshot().selected_ids(), vec![1]);
    }

    #[tokio::test]
    async fn test_blocked_delete_reports_constraint() {
        let h = loaded(&[1]).await;
        h.screen.toggle_selected(1);
        h.transport.push(Ok(json!([0])));
        let report = h.screen.bulk_delete(|_| true).await.unwrap();
        assert!(report.is_fully_blocked());
        assert!(h.notifier.toasts().contains(&(ToastKind::Error, messages::DELETE_BLOCKED.to_string())));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_selection() {
        let h = loaded(&[1]).await;
        h.screen.toggle_selected(1);
        h.transport.push(Err(ApiError::Network("down".into())));
        assert!(h.screen.bulk_delete(|_| true).await.is_none());
        assert_eq!(h.screen.snapshot().selected_ids(), vec![1]);
        assert_eq!(h.notifier.last(), Some((ToastKind::Error, messages::DELETE_FAILED.to_string())));
    }

    #[tokio::test]
    async fn test_debounced_search_fetches_once() {
        let h = loaded(&[1]).await;
        h.screen.set_page(1).await;
        let pause = || tokio::time::sleep(Duration::from_millis(5));

        let (a, b, c) = tokio::join!(
            h.screen.search("s", pause()),
            h.screen.search("sá", pause()),
            h.screen.search("sách", pause()),
        );

        assert_eq!((a, b, c), (false, false, true));
        let searches: Vec<_> = h
            .transport
            .paths()
            .into_iter()
            .filter(|p| p.contains("keyword=s"))
            .collect();
        assert_eq!(searches, vec!["GET Category/getallbypaging?page=0&pageSize=8&keyword=s%C3%A1ch"]);
        assert_eq!(h.screen.snapshot().search_input, "sách");
    }

    #[tokio::test]
    async fn test_clear_overrides_pending_keystroke() {
        let h = loaded(&[1]).await;
        let pause = tokio::time::sleep(Duration::from_millis(5));

        let (typed, cleared) = tokio::join!(h.screen.search("sách", pause), h.screen.search_now(""));

        assert!(!typed);
        assert!(cleared);
        assert!(h.transport.paths().iter().all(|p| !p.contains("keyword=s")));
        assert_eq!(h.screen.snapshot().search_input, "");
    }

    #[tokio::test]
    async fn test_orders_are_update_only() {
        let h = harness::<Order>();
        h.screen.open_create();
        assert!(!h.screen.snapshot().is_modal_open());
        assert_eq!(h.notifier.last().map(|t| t.0), Some(ToastKind::Warning));

        h.screen.toggle_selected(1);
        assert!(h.screen.bulk_delete(|_| true).await.is_none());
        assert!(h.transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported() {
        let h = harness::<Category>();
        h.transport.push(Ok(json!([{ "bookId": 1, "name": "A" }, { "id": 2, "title": "B" }])));
        let books: Vec<Book> = h.screen.load_lookup("Book").await.unwrap();
        assert_eq!(books[1].book_id, 2);
        assert_eq!(h.transport.paths(), vec!["GET Book/getall"]);

        h.transport.push(Ok(json!({ "oops": true })));
        assert!(h.screen.load_lookup::<Book>("Book").await.is_none());
        assert_eq!(h.notifier.last(), Some((ToastKind::Error, messages::INVALID_DATA.to_string())));
    }
}
