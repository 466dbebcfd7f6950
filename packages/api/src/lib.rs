//! # API crate — REST client for the blog backend
//!
//! Everything the frontends need to talk to the blog API lives here: the wire
//! models, the HTTP plumbing, and the glue that keeps the signed-in user in
//! session storage. The crate has no UI dependency, so all of it is testable
//! natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Client-side records the API returns (`User`, `Post`, `Comment`) |
//! | [`envelope`] | Normalizes the API's varying response envelopes into canonical records |
//! | [`auth`] | Reads/writes the signed-in user and bearer token in a [`store::Session`] |
//! | [`client`] | [`ApiClient`]: bearer injection, JSON and multipart requests, one method per endpoint |
//! | [`error`] | [`ApiError`] plus the auth-failure message heuristic |

pub mod auth;
pub mod client;
pub mod envelope;
pub mod error;
pub mod models;

pub use client::{ApiClient, PostForm, DEFAULT_BASE_URL};
pub use envelope::PostsPage;
pub use error::ApiError;
pub use models::{Comment, Post, User};
