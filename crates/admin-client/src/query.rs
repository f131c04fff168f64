//! Fetch intents and resource paths.
//!
//! A [`PageQuery`] is the whole question a list fetch asks. Every trigger
//! (mount, page change, settled search, refetch after a mutation) builds one
//! and hands it to the same code path.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left untouched in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Fetch intent for one page of a resource list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
    pub keyword: String,
}

impl PageQuery {
    pub fn first(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size,
            keyword: String::new(),
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self { page, ..self.clone() }
    }

    /// New keyword, back to the first page
    pub fn with_keyword(&self, keyword: &str) -> Self {
        Self {
            page: 0,
            page_size: self.page_size,
            keyword: keyword.to_string(),
        }
    }
}

/// `{Resource}/getall`
pub fn list_all_path(resource: &str) -> String {
    format!("{}/getall", resource)
}

/// `{Resource}/getallbypaging?page=..&pageSize=..&keyword=..`
pub fn paging_path(resource: &str, query: &PageQuery) -> String {
    format!(
        "{}/getallbypaging?page={}&pageSize={}&keyword={}",
        resource,
        query.page,
        query.page_size,
        encode_query_value(&query.keyword)
    )
}

pub fn create_path(resource: &str) -> String {
    format!("{}/create", resource)
}

pub fn update_path(resource: &str) -> String {
    format!("{}/update", resource)
}

/// `{Resource}/deletemulti?checkedList=[ids as JSON]`
pub fn delete_many_path(resource: &str, ids: &[i64]) -> String {
    let list = format!(
        "[{}]",
        ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",")
    );
    format!("{}/deletemulti?checkedList={}", resource, encode_query_value(&list))
}
