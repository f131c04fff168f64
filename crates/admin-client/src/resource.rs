//! Resource Layer - Core Trait
//!
//! Every dashboard entity is reached through the same five endpoints under
//! its own path segment. [`Resource`] describes an entity; [`ResourceClient`]
//! turns that description into typed calls on a [`Transport`].

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::query::{self, PageQuery};
use crate::transport::Transport;

/// An entity managed by a resource screen.
pub trait Resource: Clone + PartialEq + fmt::Debug + DeserializeOwned + Send + Sync + 'static {
    /// Path segment under the API root, e.g. `BookSpecification`
    const PATH: &'static str;
    const CAN_CREATE: bool = true;
    const CAN_DELETE: bool = true;

    /// Identity; `<= 0` means "not saved yet"
    fn id(&self) -> i64;

    /// Zero-valued template seeding the create form
    fn blank() -> Self;

    /// Body of `POST {PATH}/create`
    fn create_body(&self) -> Value;

    /// Body of `PUT {PATH}/update`
    fn update_body(&self) -> Value;
}

/// Which endpoint a draft goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
}

impl Mutation {
    pub fn for_draft<E: Resource>(draft: &E) -> Self {
        if draft.id() > 0 {
            Mutation::Update
        } else {
            Mutation::Create
        }
    }
}

/// One page of a collection, as returned by `getallbypaging`.
///
/// Only `items` is required; a body without it is malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<E> {
    pub items: Vec<E>,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub max_page: usize,
}

/// Result of a bulk delete.
///
/// The backend either answers a structured object
/// `{ deleted, blocked, blockedIds }` or the legacy array whose first element
/// is `0` when referential constraints blocked the whole batch. An empty
/// array confirms nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub requested: usize,
    pub deleted: usize,
    pub blocked: usize,
    pub blocked_ids: Vec<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuredDelete {
    deleted: usize,
    #[serde(default)]
    blocked: Option<usize>,
    #[serde(default)]
    blocked_ids: Vec<i64>,
}

impl DeleteReport {
    fn all_deleted(ids: &[i64]) -> Self {
        Self {
            requested: ids.len(),
            deleted: ids.len(),
            blocked: 0,
            blocked_ids: Vec::new(),
        }
    }

    fn all_blocked(ids: &[i64]) -> Self {
        Self {
            requested: ids.len(),
            deleted: 0,
            blocked: ids.len(),
            blocked_ids: ids.to_vec(),
        }
    }

    pub fn from_response(ids: &[i64], body: &Value) -> ApiResult<Self> {
        match body {
            Value::Object(_) => {
                let parsed: StructuredDelete = serde_json::from_value(body.clone())?;
                Ok(Self {
                    requested: ids.len(),
                    deleted: parsed.deleted,
                    blocked: parsed.blocked.unwrap_or(parsed.blocked_ids.len()),
                    blocked_ids: parsed.blocked_ids,
                })
            }
            Value::Array(values) => match values.first() {
                None => Err(ApiError::Malformed("delete answered an empty list".into())),
                Some(first) if first.as_i64() == Some(0) => Ok(Self::all_blocked(ids)),
                Some(_) => Ok(Self::all_deleted(ids)),
            },
            other if is_acknowledged(other) => Ok(Self::all_deleted(ids)),
            _ => Err(ApiError::Malformed("delete was not acknowledged".into())),
        }
    }

    pub fn is_fully_blocked(&self) -> bool {
        self.deleted == 0 && self.blocked > 0
    }
}

/// Truthiness of a mutation response: `null`, `false`, `0` and `""` mean the
/// backend did not confirm.
pub fn is_acknowledged(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `GET {resource}/getall`, for lookup lists such as the book picker.
pub async fn list_all<T: DeserializeOwned>(transport: &dyn Transport, resource: &str) -> ApiResult<Vec<T>> {
    let body = transport.get(&query::list_all_path(resource)).await?;
    Ok(serde_json::from_value(body)?)
}

/// Typed endpoint calls for one entity type.
pub struct ResourceClient<E> {
    transport: Rc<dyn Transport>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Resource> ResourceClient<E> {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self {
            transport,
            _entity: PhantomData,
        }
    }

    pub fn transport(&self) -> &Rc<dyn Transport> {
        &self.transport
    }

    pub async fn fetch_page(&self, query: &PageQuery) -> ApiResult<PageResult<E>> {
        let body = self.transport.get(&query::paging_path(E::PATH, query)).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn list_all(&self) -> ApiResult<Vec<E>> {
        list_all(self.transport.as_ref(), E::PATH).await
    }

    /// Create or update depending on the draft's id.
    pub async fn save(&self, draft: &E) -> ApiResult<Mutation> {
        let mutation = Mutation::for_draft(draft);
        debug!("{:?} {} #{}", mutation, E::PATH, draft.id());
        let body = match mutation {
            Mutation::Create => {
                self.transport
                    .post(&query::create_path(E::PATH), &draft.create_body())
                    .await?
            }
            Mutation::Update => {
                self.transport
                    .put(&query::update_path(E::PATH), &draft.update_body())
                    .await?
            }
        };
        if is_acknowledged(&body) {
            Ok(mutation)
        } else {
            Err(ApiError::Malformed("save was not acknowledged".into()))
        }
    }

    pub async fn delete_many(&self, ids: &[i64]) -> ApiResult<DeleteReport> {
        let body = self
            .transport
            .delete(&query::delete_many_path(E::PATH, ids))
            .await?;
        DeleteReport::from_response(ids, &body)
    }
}
