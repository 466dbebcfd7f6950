//! Client-side records the blog API returns.
//!
//! These are transient mirrors of server state, never validated beyond shape.
//! Every field is defaulted and the Mongo-style `_id` spelling is accepted, so
//! a partially populated object still deserializes instead of failing the whole
//! response. Identity comparisons ([`Post::liked_by`], [`Post::authored_by`],
//! [`Comment::authored_by`]) require a non-empty id on both sides; two unknown
//! users are never considered the same person.

use serde::{Deserialize, Serialize};

/// A blog user as the API and session storage represent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

impl User {
    /// Display name, falling back to "Unknown" when the API sent none.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            "Unknown"
        } else {
            &self.username
        }
    }
}

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    /// Ids of the users who liked this post.
    #[serde(default)]
    pub likes: Vec<String>,
    /// Server-relative path of the uploaded image, when there is one.
    #[serde(default)]
    pub image: Option<String>,
}

impl Post {
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.display_name())
            .unwrap_or("Unknown")
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn liked_by(&self, user: &User) -> bool {
        !user.id.is_empty() && self.likes.iter().any(|id| id == &user.id)
    }

    pub fn authored_by(&self, user: &User) -> bool {
        !user.id.is_empty()
            && self
                .author
                .as_ref()
                .is_some_and(|author| author.id == user.id)
    }
}

/// A comment on a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Comment {
    /// Comment bylines fall back to "Anonymous", unlike post bylines.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.username.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
    }

    pub fn authored_by(&self, user: &User) -> bool {
        !user.id.is_empty()
            && self
                .author
                .as_ref()
                .is_some_and(|author| author.id == user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: "ada".to_string(),
        }
    }

    #[test]
    fn test_mongo_field_names_deserialize() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "title": "Hello",
            "createdAt": "2024-05-01T10:00:00Z",
            "author": { "_id": "u1", "username": "ada" },
        }))
        .unwrap();

        assert_eq!(post.id, "p1");
        assert_eq!(post.created_at, "2024-05-01T10:00:00Z");
        assert_eq!(post.author.unwrap().id, "u1");
    }

    #[test]
    fn test_missing_fields_default() {
        let post: Post = serde_json::from_value(serde_json::json!({ "title": "Bare" })).unwrap();

        assert_eq!(post.id, "");
        assert_eq!(post.content, "");
        assert!(post.author.is_none());
        assert!(post.likes.is_empty());
        assert!(post.image.is_none());
    }

    #[test]
    fn test_liked_by_requires_non_empty_id() {
        let post = Post {
            likes: vec!["u1".to_string(), String::new()],
            ..Post::default()
        };

        assert!(post.liked_by(&user("u1")));
        assert!(!post.liked_by(&user("u2")));
        // An anonymous viewer never matches, even against an empty likes entry.
        assert!(!post.liked_by(&User::default()));
    }

    #[test]
    fn test_authored_by_requires_non_empty_id() {
        let post = Post {
            author: Some(user("u1")),
            ..Post::default()
        };

        assert!(post.authored_by(&user("u1")));
        assert!(!post.authored_by(&user("u2")));
        assert!(!post.authored_by(&User::default()));

        let anonymous_post = Post {
            author: Some(User::default()),
            ..Post::default()
        };
        assert!(!anonymous_post.authored_by(&User::default()));
    }

    #[test]
    fn test_byline_fallbacks() {
        assert_eq!(Post::default().author_name(), "Unknown");
        assert_eq!(Comment::default().author_name(), "Anonymous");

        let nameless_author = Some(User {
            id: "u1".to_string(),
            username: String::new(),
        });
        let post = Post {
            author: nameless_author.clone(),
            ..Post::default()
        };
        let comment = Comment {
            author: nameless_author,
            ..Comment::default()
        };
        assert_eq!(post.author_name(), "Unknown");
        assert_eq!(comment.author_name(), "Anonymous");
    }
}
