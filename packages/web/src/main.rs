use dioxus::prelude::*;

use navbar::Navbar;
use router::{use_route, Route, RouterProvider};
use ui::{MessageProvider, MessageToast, SessionProvider};
use views::{AuthMode, AuthPage, Compose, PostDetail, Posts};

mod navbar;
mod router;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            MessageProvider {
                RouterProvider {
                    Shell {}
                }
            }
        }
    }
}

/// Chrome around the routed page: the header and the toast overlay. Detail
/// and compose pages are keyed by their target so switching targets remounts
/// them with fresh state.
#[component]
fn Shell() -> Element {
    let route = use_route();

    let page = match route() {
        Route::Posts => rsx! {
            Posts {}
        },
        Route::PostDetail { id } => rsx! {
            PostDetail { key: "{id}", id }
        },
        Route::Compose { edit } => {
            let remount = edit.clone().unwrap_or_default();
            rsx! {
                Compose { key: "{remount}", edit }
            }
        }
        Route::Login => rsx! {
            AuthPage { mode: AuthMode::Login }
        },
        Route::Register => rsx! {
            AuthPage { mode: AuthMode::Register }
        },
    };

    rsx! {
        Navbar {}
        MessageToast {}
        main {
            id: "app-container",
            {page}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_boots_to_posts_page() {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("My Blog"));
        assert!(html.contains("Latest Posts"));
        assert!(html.contains("Login / Register"));
    }
}
