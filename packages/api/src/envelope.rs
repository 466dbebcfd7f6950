//! # Response envelopes — one canonical shape per endpoint family
//!
//! The upstream API does not commit to a single response layout: post lists
//! arrive as `{posts: [...]}` from one deployment and `{data: [...]}` from
//! another, pagination counters travel as `pages` or `totalPages`, and login
//! tokens as `token`, `data.token`, or `accessToken`. All of that guessing is
//! confined to this module. Each function probes the known spellings and
//! returns one canonical record, so the rest of the workspace never touches
//! raw JSON.
//!
//! Numeric fields treat zero as absent (a server that sends `pages: 0` still
//! yields one page), and empty-string tokens count as missing.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Comment, Post, User};

/// Canonical form of a paginated post-list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    /// 1-based page this response describes.
    pub page: u32,
    /// Total number of pages.
    pub pages: u32,
}

/// Normalize a post-list response.
pub fn posts_page(value: &Value, requested_page: u32) -> PostsPage {
    PostsPage {
        posts: collect(array_field(value, &["posts", "data"])),
        page: count_field(value, &["page", "pageNumber"]).unwrap_or(requested_page),
        pages: count_field(value, &["pages", "totalPages"]).unwrap_or(1),
    }
}

/// Normalize a comment-list response.
pub fn comment_list(value: &Value) -> Vec<Comment> {
    collect(array_field(value, &["comments", "data"]))
}

/// Normalize a single-post response. Every model field is defaulted, so any
/// object parses; missing fields render blank rather than failing the page.
pub fn single_post(value: Value) -> Post {
    serde_json::from_value(value).unwrap_or_default()
}

/// Extract the signed-in user and bearer token from a login response.
///
/// The token is mandatory; a response without one in any known spot fails with
/// [`ApiError::MissingToken`]. The user is best-effort: `user`, `data.user`,
/// or the whole body, whichever first parses.
pub fn login_session(value: &Value) -> Result<(User, String), ApiError> {
    let token = non_empty_str(value.get("token"))
        .or_else(|| non_empty_str(value.pointer("/data/token")))
        .or_else(|| non_empty_str(value.get("accessToken")))
        .ok_or(ApiError::MissingToken)?;

    let user_value = value
        .get("user")
        .filter(|v| !v.is_null())
        .or_else(|| value.pointer("/data/user").filter(|v| !v.is_null()))
        .unwrap_or(value);
    let user = serde_json::from_value(user_value.clone()).unwrap_or_default();

    Ok((user, token))
}

fn array_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| value.get(key).filter(|v| v.is_array()))
}

/// Deserialize the items of an array field one by one, dropping ones that do
/// not parse instead of discarding the whole list.
fn collect<T: DeserializeOwned>(items: Option<&Value>) -> Vec<T> {
    items
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn count_field(value: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_u64)
            .filter(|n| *n > 0)
            .map(|n| n as u32)
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
