use dioxus::prelude::*;

use ui::{use_messages, use_session};

use crate::router::{navigate, Route};

/// Site header: brand link home, greeting, auth toggle, new-post shortcut.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let messages = use_messages();

    let user = session.user();

    let auth_session = session.clone();
    let on_auth = move |_| {
        if auth_session.user().is_some() {
            auth_session.sign_out();
            messages.success("Logged out");
            navigate(Route::Posts);
        } else {
            navigate(Route::Login);
        }
    };

    rsx! {
        header {
            class: "site-header",
            a {
                class: "logo",
                href: "#",
                onclick: move |evt| {
                    evt.prevent_default();
                    navigate(Route::Posts);
                },
                "My Blog"
            }
            nav {
                class: "site-nav",
                if let Some(user) = &user {
                    span {
                        id: "user-info",
                        "Welcome, {user.username}"
                    }
                }
                if user.is_some() {
                    button {
                        id: "create-post-btn",
                        class: "btn",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            navigate(Route::Compose { edit: None });
                        },
                        "New Post"
                    }
                }
                button {
                    id: "auth-btn",
                    class: "btn",
                    onclick: on_auth,
                    if user.is_some() { "Logout" } else { "Login / Register" }
                }
            }
        }
    }
}
