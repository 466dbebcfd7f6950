//! Session context and hooks for the UI.

use dioxus::prelude::*;

use api::{auth, ApiClient, User};
use store::Session;

/// Handle to the signed-in state. Cloning is cheap; every clone shares the
/// same signal and backing store.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    user: Signal<Option<User>>,
    session: Session,
}

impl SessionHandle {
    /// The signed-in user, if any. Reading subscribes the caller to login and
    /// logout changes.
    pub fn user(&self) -> Option<User> {
        (self.user)()
    }

    /// Persist a login and notify every subscriber.
    pub fn sign_in(&self, user: User, token: &str) {
        tracing::debug!("signed in as {}", user.display_name());
        auth::set_auth_data(&self.session, &user, token);
        let mut signal = self.user;
        signal.set(Some(user));
    }

    /// Drop the stored credentials and notify every subscriber.
    pub fn sign_out(&self) {
        tracing::debug!("signed out");
        auth::clear_auth_data(&self.session);
        let mut signal = self.user;
        signal.set(None);
    }
}

/// Get the current session handle.
/// Panics when called outside a [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the API client bound to the current session.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Pick the storage backend for the current platform.
fn default_store() -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Session::new(store::MemoryStore::new())
    }
}

/// Provider component that owns session state and the API client.
/// Wrap the app with this to enable [`use_session`] and [`use_api`].
///
/// The optional `session` prop substitutes the storage backend; tests pass a
/// pre-seeded in-memory store here.
#[component]
pub fn SessionProvider(#[props(default)] session: Option<Session>, children: Element) -> Element {
    let session = use_hook(|| session.unwrap_or_else(default_store));
    let user = use_signal(|| auth::current_user(&session));

    use_context_provider(|| SessionHandle {
        user,
        session: session.clone(),
    });
    use_context_provider(|| ApiClient::new(session.clone()));

    rsx! {
        {children}
    }
}
