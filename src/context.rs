//! Application Context
//!
//! Shared state provided via Leptos Context API. The services (session,
//! transport, notifier) are built once here and handed to every screen.

use std::rc::Rc;

use admin_client::transport::UnauthorizedHook;
use admin_client::{ClientConfig, HttpTransport, MemoryStore, Notifier, Session, SessionUser, Transport};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::routes::{self, Route};
use crate::storage::BrowserStore;
use crate::store::{ToastNotifier, ToastState, ToastStore};

/// Composition root of the non-reactive collaborators
pub struct Services {
    pub config: ClientConfig,
    pub session: Session,
    pub transport: Rc<dyn Transport>,
    pub notifier: Rc<dyn Notifier>,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Rc<Services>, LocalStorage>,
    /// Screen being shown - read
    pub route: ReadSignal<Route>,
    /// Screen being shown - write
    set_route: WriteSignal<Route>,
    /// Whether a token is stored - read
    pub authenticated: ReadSignal<bool>,
    /// Whether a token is stored - write
    set_authenticated: WriteSignal<bool>,
    /// Protected route that bounced to sign-in - read
    pub return_to: ReadSignal<Option<Route>>,
    /// Protected route that bounced to sign-in - write
    set_return_to: WriteSignal<Option<Route>>,
    pub toasts: ToastStore,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let (route, set_route) = signal(Route::from_path(&routes::current_path()));
        let (return_to, set_return_to) = signal(None::<Route>);

        let store: Rc<dyn admin_client::KeyValueStore> = match BrowserStore::open() {
            Some(store) => Rc::new(store),
            None => Rc::new(MemoryStore::new()),
        };
        let session = Session::new(store);
        let (authenticated, set_authenticated) = signal(session.is_authenticated());

        let toasts = Store::new(ToastState::default());
        let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(toasts, config.toast_lifetime));

        // A 401 anywhere ends the session and bounces to sign-in.
        let on_unauthorized: UnauthorizedHook = Rc::new(move || {
            set_authenticated.set(false);
            let current = route.get_untracked();
            if current.is_protected() {
                set_return_to.set(Some(current));
            }
            routes::push_history(Route::SignIn.path());
            set_route.set(Route::SignIn);
        });
        let transport: Rc<dyn Transport> = Rc::new(HttpTransport::new(config.clone(), session.clone(), on_unauthorized));

        let services = Rc::new(Services {
            config,
            session,
            transport,
            notifier,
        });

        Self {
            services: StoredValue::new_local(services),
            route,
            set_route,
            authenticated,
            set_authenticated,
            return_to,
            set_return_to,
            toasts,
        }
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.get_value()
    }

    /// Show `route` and record it in the browser history.
    pub fn navigate(&self, route: Route) {
        if route == self.route.get_untracked() {
            return;
        }
        routes::push_history(route.path());
        self.set_route.set(route);
    }

    /// Follow a back/forward step the browser already applied to the URL.
    pub fn sync_route(&self) {
        self.set_route.set(Route::from_path(&routes::current_path()));
    }

    /// Send a signed-out visitor to sign-in, remembering where they wanted to go.
    pub fn require_sign_in(&self, requested: Route) {
        self.set_return_to.set(Some(requested));
        routes::push_history(Route::SignIn.path());
        self.set_route.set(Route::SignIn);
    }

    /// Route to land on after a successful login.
    pub fn signed_in(&self) {
        self.set_authenticated.set(true);
        let requested = self.return_to.get_untracked().map(Route::path);
        let target = Route::from_path(&admin_client::auth::redirect_target(requested));
        self.set_return_to.set(None);
        routes::push_history(target.path());
        self.set_route.set(target);
    }

    pub fn sign_out(&self) {
        self.services().session.clear();
        info!("Signed out");
        self.set_authenticated.set(false);
        self.set_return_to.set(None);
        routes::push_history(Route::SignIn.path());
        self.set_route.set(Route::SignIn);
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.services().session.user()
    }
}
