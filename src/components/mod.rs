//! UI Components
//!
//! Reusable Leptos components.

mod book_picker;
mod bulk_delete_button;
mod modal;
mod pager;
mod search_box;
mod sidebar;
mod toast_host;
pub mod table;

pub use book_picker::BookPicker;
pub use bulk_delete_button::BulkDeleteButton;
pub use modal::Modal;
pub use pager::Pager;
pub use search_box::SearchBox;
pub use sidebar::Sidebar;
pub use toast_host::ToastHost;
