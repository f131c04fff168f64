//! Client-side routes
//!
//! The dashboard is a single page; the URL path picks the screen and the
//! History API keeps it in sync without reloads.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Category,
    Order,
    Book,
    Specification,
    Image,
    SignIn,
    NotFound,
}

impl Route {
    /// Sidebar entries, in display order
    pub const MENU: [Route; 6] = [
        Route::Home,
        Route::Category,
        Route::Order,
        Route::Book,
        Route::Specification,
        Route::Image,
    ];

    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/category" => Route::Category,
            "/order" => Route::Order,
            "/product" => Route::Book,
            "/specification" => Route::Specification,
            "/image" => Route::Image,
            "/signin" => Route::SignIn,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Category => "/category",
            Route::Order => "/order",
            Route::Book => "/product",
            Route::Specification => "/specification",
            Route::Image => "/image",
            Route::SignIn => "/signin",
            Route::NotFound => "/404",
        }
    }

    /// Breadcrumb and sidebar label
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Tổng quan",
            Route::Category => "Danh mục",
            Route::Order => "Đơn hàng",
            Route::Book => "Sách",
            Route::Specification => "Thông số kỹ thuật",
            Route::Image => "Hình ảnh sách",
            Route::SignIn => "Đăng nhập",
            Route::NotFound => "Không tìm thấy trang",
        }
    }

    /// Screens behind the sign-in wall. The 404 page is public.
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::SignIn | Route::NotFound)
    }
}

/// Path of the page currently shown by the browser
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_else(|_| "/".to_string())
}

/// Record a navigation in the browser history.
pub fn push_history(path: &str) {
    match window().history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                tracing::warn!("pushState to {} failed: {:?}", path, e);
            }
        }
        Err(e) => tracing::warn!("History API unavailable: {:?}", e),
    }
}
