//! # ApiClient — request plumbing plus one method per endpoint
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] with the behaviors every call
//! shares: a `Authorization: Bearer` header whenever the session holds a
//! token, tolerant body parsing (an unparseable body reads as JSON `null`
//! rather than failing the call), and error-message extraction from failure
//! responses. JSON and multipart requests go through the same path; multipart
//! bodies are handed to the platform untouched so it can set the boundary
//! content type itself.
//!
//! There is no retry, timeout, or caching layer; every call maps to exactly
//! one request. Endpoint methods normalize their responses through
//! [`crate::envelope`] before returning.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use store::Session;

use crate::auth;
use crate::envelope::{self, PostsPage};
use crate::error::ApiError;
use crate::models::{Comment, Post, User};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Fields of a create/edit post submission, sent as multipart form data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    /// Replacement image as (file name, bytes). `None` leaves the stored
    /// image untouched on edit.
    pub image: Option<(String, Vec<u8>)>,
}

impl PostForm {
    fn into_multipart(self) -> Form {
        let mut form = Form::new()
            .text("title", self.title)
            .text("content", self.content);
        if let Some((name, bytes)) = self.image {
            form = form.part("image", Part::bytes(bytes).file_name(name));
        }
        form
    }
}

/// Client for the blog REST API.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
    session: Session,
}

impl ApiClient {
    /// Build a client against [`DEFAULT_BASE_URL`], overridable at compile
    /// time through the `MINIBLOG_API_BASE` environment variable.
    pub fn new(session: Session) -> Self {
        Self::with_base(default_base_url(), session)
    }

    pub fn with_base(base: impl Into<String>, session: Session) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Absolute URL for a server-stored upload path. Uploads are served from
    /// the server root, not the API prefix.
    pub fn file_url(&self, path: &str) -> String {
        format!("{}/{}", asset_root(&self.base), path.trim_start_matches('/'))
    }

    /// Start a request against an API path. The bearer header is read from
    /// the session at call time, so a login in another tab is picked up.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = auth::token(&self.session) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and apply the shared response policy.
    async fn send(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("request did not complete: {err}");
                return Err(err.into());
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or(Value::Null);

        if status.is_success() {
            Ok(body)
        } else {
            let message = failure_message(status, &body);
            tracing::debug!(%status, "api call failed: {message}");
            Err(ApiError::Api(message))
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), ApiError> {
        let body = self
            .send(
                self.request(Method::POST, "/users/login")
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;
        envelope::login_session(&body)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/users/register").json(&json!({
            "username": username,
            "email": email,
            "password": password,
        })))
        .await?;
        Ok(())
    }

    pub async fn fetch_posts(&self, page: u32) -> Result<PostsPage, ApiError> {
        let body = self
            .send(
                self.request(Method::GET, "/posts")
                    .query(&[("pageNumber", page)]),
            )
            .await?;
        Ok(envelope::posts_page(&body, page))
    }

    pub async fn fetch_post(&self, id: &str) -> Result<Post, ApiError> {
        let body = self
            .send(self.request(Method::GET, &format!("/posts/{id}")))
            .await?;
        Ok(envelope::single_post(body))
    }

    pub async fn fetch_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        let body = self
            .send(self.request(Method::GET, &format!("/comments/{post_id}")))
            .await?;
        Ok(envelope::comment_list(&body))
    }

    /// Fetch a post and its comments concurrently. A comments failure
    /// degrades to an empty list; a post failure fails the whole load.
    pub async fn fetch_post_with_comments(
        &self,
        id: &str,
    ) -> Result<(Post, Vec<Comment>), ApiError> {
        let (post, comments) = futures::join!(self.fetch_post(id), self.fetch_comments(id));
        merge_detail(post, comments)
    }

    pub async fn create_post(&self, form: PostForm) -> Result<(), ApiError> {
        self.send(
            self.request(Method::POST, "/posts")
                .multipart(form.into_multipart()),
        )
        .await?;
        Ok(())
    }

    pub async fn update_post(&self, id: &str, form: PostForm) -> Result<(), ApiError> {
        self.send(
            self.request(Method::PUT, &format!("/posts/{id}"))
                .multipart(form.into_multipart()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/posts/{id}")))
            .await?;
        Ok(())
    }

    pub async fn toggle_like(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::PUT, &format!("/posts/{id}/like")))
            .await?;
        Ok(())
    }

    pub async fn add_comment(&self, post_id: &str, content: &str) -> Result<(), ApiError> {
        self.send(
            self.request(Method::POST, &format!("/comments/{post_id}"))
                .json(&json!({ "content": content })),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/comments/{comment_id}")))
            .await?;
        Ok(())
    }
}

fn default_base_url() -> &'static str {
    option_env!("MINIBLOG_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

/// Strip a trailing `/api` (with or without a final slash) to get the root
/// uploads are served from.
fn asset_root(base: &str) -> &str {
    let trimmed = base.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed)
}

/// Message for a failed response: the body's `message` field, else the
/// status' canonical reason, else a generic fallback.
fn failure_message(status: StatusCode, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("API error").to_string())
}

/// Join the two halves of a detail load. Comments are optional; the post is
/// not.
fn merge_detail(
    post: Result<Post, ApiError>,
    comments: Result<Vec<Comment>, ApiError>,
) -> Result<(Post, Vec<Comment>), ApiError> {
    let post = post?;
    Ok((post, comments.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::MemoryStore;

    fn client_with_session() -> (ApiClient, Session) {
        let session = Session::new(MemoryStore::new());
        let client = ApiClient::with_base("http://localhost:5000/api", session.clone());
        (client, session)
    }

    #[test]
    fn test_failure_message_prefers_body_message() {
        let body = json!({ "message": "Post not found" });
        assert_eq!(
            failure_message(StatusCode::NOT_FOUND, &body),
            "Post not found"
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_status_reason() {
        assert_eq!(
            failure_message(StatusCode::NOT_FOUND, &Value::Null),
            "Not Found"
        );
        // An empty message string does not count.
        assert_eq!(
            failure_message(StatusCode::IM_A_TEAPOT, &json!({ "message": "" })),
            "I'm a teapot"
        );
    }

    #[test]
    fn test_failure_message_generic_fallback() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(failure_message(status, &Value::Null), "API error");
    }

    #[test]
    fn test_asset_root_strips_api_suffix() {
        assert_eq!(asset_root("http://localhost:5000/api"), "http://localhost:5000");
        assert_eq!(asset_root("http://localhost:5000/api/"), "http://localhost:5000");
        assert_eq!(asset_root("https://blog.example"), "https://blog.example");
    }

    #[test]
    fn test_file_url_joins_cleanly() {
        let (client, _) = client_with_session();

        assert_eq!(
            client.file_url("uploads/a.png"),
            "http://localhost:5000/uploads/a.png"
        );
        assert_eq!(
            client.file_url("//uploads/a.png"),
            "http://localhost:5000/uploads/a.png"
        );
    }

    #[test]
    fn test_bearer_header_follows_session() {
        let (client, session) = client_with_session();

        let request = client.request(Method::GET, "/posts").build().unwrap();
        assert!(request.headers().get("authorization").is_none());

        session.set(auth::TOKEN_KEY, "tok-1");
        let request = client.request(Method::GET, "/posts").build().unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok-1"
        );
    }

    #[test]
    fn test_merge_detail_tolerates_comment_failures() {
        let post = Post {
            id: "p1".to_string(),
            ..Post::default()
        };

        let merged = merge_detail(Ok(post.clone()), Err(ApiError::Api("boom".to_string())));
        let (merged_post, comments) = merged.unwrap();
        assert_eq!(merged_post.id, "p1");
        assert!(comments.is_empty());
    }

    #[test]
    fn test_merge_detail_propagates_post_failures() {
        let merged = merge_detail(
            Err(ApiError::Api("Post not found".to_string())),
            Ok(vec![Comment::default()]),
        );

        assert!(matches!(merged, Err(ApiError::Api(m)) if m == "Post not found"));
    }
}
