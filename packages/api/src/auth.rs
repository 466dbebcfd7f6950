//! Persistence of the signed-in user and bearer token.
//!
//! Two session keys: the serialized [`User`] under `currentUser` and the raw
//! token string under `token`. A malformed stored user reads as signed out
//! rather than raising; the token is opaque and never parsed.

use store::Session;

use crate::models::User;

pub const USER_KEY: &str = "currentUser";
pub const TOKEN_KEY: &str = "token";

pub fn current_user(session: &Session) -> Option<User> {
    session.get_json(USER_KEY)
}

pub fn token(session: &Session) -> Option<String> {
    session.get(TOKEN_KEY)
}

pub fn set_auth_data(session: &Session, user: &User, token: &str) {
    session.set_json(USER_KEY, user);
    session.set(TOKEN_KEY, token);
}

pub fn clear_auth_data(session: &Session) {
    session.remove(USER_KEY);
    session.remove(TOKEN_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_auth_data_roundtrip() {
        let session = Session::new(MemoryStore::new());
        assert!(current_user(&session).is_none());
        assert!(token(&session).is_none());

        let user = User {
            id: "u1".to_string(),
            username: "ada".to_string(),
        };
        set_auth_data(&session, &user, "tok-1");
        assert_eq!(current_user(&session), Some(user));
        assert_eq!(token(&session).as_deref(), Some("tok-1"));

        clear_auth_data(&session);
        assert!(current_user(&session).is_none());
        assert!(token(&session).is_none());
    }

    #[test]
    fn test_corrupt_stored_user_reads_as_signed_out() {
        let session = Session::new(MemoryStore::new());
        session.set(USER_KEY, "{\"id\": ");
        session.set(TOKEN_KEY, "tok-1");

        assert!(current_user(&session).is_none());
        // The token is an opaque string and stays readable.
        assert_eq!(token(&session).as_deref(), Some("tok-1"));
    }
}
