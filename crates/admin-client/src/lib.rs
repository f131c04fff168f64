//! Admin Client
//!
//! Everything the bookstore dashboard does that is not drawing: talking to
//! the REST API, keeping the session, and running the list + modal flow of
//! each resource screen. No UI framework types appear here, so the whole
//! crate is testable natively.

pub mod auth;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod pagination;
pub mod query;
pub mod resource;
pub mod screen;
pub mod sequence;
pub mod session;
pub mod state;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use notify::{Notifier, ToastId, ToastKind};
pub use resource::{DeleteReport, Mutation, PageResult, Resource};
pub use screen::ResourceScreen;
pub use session::{KeyValueStore, MemoryStore, Session, SessionUser};
pub use state::{LoadPhase, Modal, ResourceState};
pub use transport::{HttpTransport, Method, Transport};
