//! The pages the router can show, one module per page.

mod auth;
pub use auth::{AuthMode, AuthPage};

mod compose;
pub use compose::Compose;

mod post_detail;
pub use post_detail::PostDetail;

mod posts;
pub use posts::Posts;
