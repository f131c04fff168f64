//! Reactive binding of a [`ResourceScreen`].
//!
//! The screen owns the logic; the handle mirrors its state into a signal and
//! runs its async operations on the local executor.

use std::future::Future;
use std::rc::Rc;

use admin_client::{Resource, ResourceScreen, ResourceState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

pub struct ResourceHandle<E: Resource> {
    pub state: RwSignal<ResourceState<E>>,
    screen: StoredValue<Rc<ResourceScreen<E>>, LocalStorage>,
    /// Width of the pager window
    pub page_window: usize,
}

impl<E: Resource> Clone for ResourceHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Resource> Copy for ResourceHandle<E> {}

/// Build the screen for `E`, mirror its state and load the first page.
pub fn use_resource<E: Resource>() -> ResourceHandle<E> {
    let ctx = expect_context::<AppContext>();
    let services = ctx.services();
    let screen = Rc::new(ResourceScreen::<E>::new(
        services.transport.clone(),
        services.notifier.clone(),
        &services.config,
    ));

    let state = RwSignal::new(screen.snapshot());
    // The signal is gone once the page unmounts; late responses land nowhere.
    screen.subscribe(move |snapshot| {
        let _ = state.try_set(snapshot.clone());
    });

    let handle = ResourceHandle {
        state,
        screen: StoredValue::new_local(screen),
        page_window: services.config.page_window,
    };
    handle.refresh();
    handle
}

impl<E: Resource> ResourceHandle<E> {
    fn spawn<F, Fut>(self, op: F)
    where
        F: FnOnce(Rc<ResourceScreen<E>>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(screen) = self.screen.try_get_value() {
            spawn_local(op(screen));
        }
    }

    fn with_screen(self, op: impl FnOnce(&ResourceScreen<E>)) {
        self.screen.with_value(|screen| op(screen));
    }

    // ========================
    // List
    // ========================

    pub fn refresh(self) {
        self.spawn(|screen| async move {
            screen.refresh().await;
        });
    }

    pub fn set_page(self, page: usize) {
        self.spawn(move |screen| async move {
            screen.set_page(page).await;
        });
    }

    /// Keystroke in the search box; fetches once typing settles.
    pub fn search(self, keyword: String) {
        self.spawn(move |screen| async move {
            let millis = u32::try_from(screen.search_delay().as_millis()).unwrap_or(u32::MAX);
            screen.search(&keyword, TimeoutFuture::new(millis)).await;
        });
    }

    /// Enter in the search box or the clear button
    pub fn search_now(self, keyword: String) {
        self.spawn(move |screen| async move {
            screen.search_now(&keyword).await;
        });
    }

    // ========================
    // Modal & selection
    // ========================

    pub fn open_create(self) {
        self.with_screen(|screen| screen.open_create());
    }

    pub fn open_edit(self, item: &E) {
        self.with_screen(|screen| screen.open_edit(item));
    }

    pub fn edit(self, edit: impl FnOnce(&mut E)) {
        self.with_screen(|screen| screen.edit_draft(edit));
    }

    pub fn close_modal(self) {
        self.with_screen(|screen| screen.close_modal());
    }

    pub fn toggle_selected(self, id: i64) {
        self.with_screen(|screen| screen.toggle_selected(id));
    }

    pub fn toggle_all(self) {
        self.with_screen(|screen| screen.toggle_all());
    }

    pub fn submit(self) {
        self.spawn(|screen| async move {
            screen.submit().await;
        });
    }

    /// `confirmed` is the answer of the inline confirmation; an empty
    /// selection never gets that far.
    pub fn delete_selected(self, confirmed: bool) {
        self.spawn(move |screen| async move {
            screen.bulk_delete(move |_| confirmed).await;
        });
    }

    /// Fill `target` from `{resource}/getall`.
    pub fn load_lookup<T>(self, resource: &'static str, target: RwSignal<Vec<T>>)
    where
        T: serde::de::DeserializeOwned + Send + Sync + 'static,
    {
        self.spawn(move |screen| async move {
            if let Some(items) = screen.load_lookup::<T>(resource).await {
                let _ = target.try_set(items);
            }
        });
    }

    // ========================
    // Derived reads
    // ========================

    pub fn selected_count(self) -> Signal<usize> {
        Signal::derive(move || self.state.with(|s| s.selection.len()))
    }

    pub fn search_input(self) -> Signal<String> {
        Signal::derive(move || self.state.with(|s| s.search_input.clone()))
    }

    pub fn modal_open(self) -> Signal<bool> {
        Signal::derive(move || self.state.with(|s| s.is_modal_open()))
    }

    pub fn is_submitting(self) -> bool {
        self.state.with(|s| s.submitting)
    }

    /// Read one field of the open draft; the blank entity's value when closed.
    pub fn draft_field<T>(self, read: impl Fn(&E) -> T) -> T {
        self.state.with(|s| match s.draft() {
            Some(draft) => read(draft),
            None => read(&E::blank()),
        })
    }

    /// "Thêm mới" or "Chỉnh sửa" depending on the draft
    pub fn modal_title(self, noun: &'static str) -> Signal<String> {
        Signal::derive(move || {
            let editing = self.state.with(|s| s.draft().is_some_and(|d| d.id() > 0));
            if editing {
                format!("Chỉnh sửa {}", noun)
            } else {
                format!("Thêm mới {}", noun)
            }
        })
    }
}
