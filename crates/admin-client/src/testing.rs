//! Test doubles: a scripted transport and a notifier that records toasts.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::notify::{Notifier, ToastId, ToastKind};
use crate::transport::{Method, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

struct Scripted {
    delay: Duration,
    result: ApiResult<Value>,
}

/// Answers calls from a FIFO script; an empty script answers an empty page.
#[derive(Default)]
pub struct FakeTransport {
    calls: RefCell<Vec<Call>>,
    script: RefCell<VecDeque<Scripted>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: ApiResult<Value>) {
        self.push_delayed(Duration::ZERO, result);
    }

    pub fn push_delayed(&self, delay: Duration, result: ApiResult<Value>) {
        self.script.borrow_mut().push_back(Scripted { delay, result });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| format!("{} {}", c.method, c.path)).collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Value> {
        self.calls.borrow_mut().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted { delay, result }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(json!({ "items": [], "totalPages": 0 })),
        }
    }
}

/// Keeps every toast for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: RefCell<Vec<(ToastKind, String)>>,
    dismissed: RefCell<Vec<ToastId>>,
    next_id: Cell<ToastId>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.borrow().clone()
    }

    pub fn last(&self) -> Option<(ToastKind, String)> {
        self.toasts.borrow().last().cloned()
    }

    pub fn dismissed(&self) -> Vec<ToastId> {
        self.dismissed.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) -> ToastId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.toasts.borrow_mut().push((kind, message.to_string()));
        id
    }

    fn dismiss(&self, id: ToastId) {
        self.dismissed.borrow_mut().push(id);
    }
}
