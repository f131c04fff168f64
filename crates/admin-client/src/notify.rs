//! Notification seam.
//!
//! Screens report outcomes here and move on; whoever implements the trait
//! decides how toasts are drawn and when they disappear.

/// Visual tone of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Loading,
}

impl ToastKind {
    /// Loading toasts live until dismissed, the rest expire on their own.
    pub fn is_sticky(self) -> bool {
        matches!(self, ToastKind::Loading)
    }
}

/// Handle returned by [`Notifier::loading`]
pub type ToastId = u64;

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str) -> ToastId;
    fn dismiss(&self, id: ToastId);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }

    fn warning(&self, message: &str) {
        self.notify(ToastKind::Warning, message);
    }

    fn loading(&self, message: &str) -> ToastId {
        self.notify(ToastKind::Loading, message)
    }
}

/// User-facing texts of the resource screens.
pub mod messages {
    pub const LOAD_FAILED: &str = "Không thể tải danh sách";
    pub const INVALID_DATA: &str = "Dữ liệu không hợp lệ";
    pub const SAVING: &str = "Đang lưu...";
    pub const CREATE_OK: &str = "Thêm thành công";
    pub const CREATE_FAILED: &str = "Thêm thất bại";
    pub const UPDATE_OK: &str = "Cập nhật thành công";
    pub const UPDATE_FAILED: &str = "Cập nhật thất bại";
    pub const CREATE_NOT_ALLOWED: &str = "Không hỗ trợ thêm mới";
    pub const SELECT_TO_DELETE: &str = "Vui lòng chọn ít nhất một dòng để xóa";
    pub const DELETE_BLOCKED: &str = "Không thể xóa vì có sản phẩm liên quan";
    pub const DELETE_FAILED: &str = "Xóa thất bại";
    pub const LOGIN_FAILED: &str = "Đăng nhập thất bại";

    pub fn deleted(count: usize) -> String {
        format!("Đã xóa thành công {} dòng", count)
    }

    pub fn partially_deleted(deleted: usize, blocked: usize) -> String {
        format!("Đã xóa {} dòng, {} dòng có sản phẩm liên quan", deleted, blocked)
    }

    pub fn confirm_delete(count: usize) -> String {
        format!("Bạn có chắc chắn muốn xóa {} dòng đã chọn?", count)
    }
}
