//! # Fragment router
//!
//! Navigation state lives entirely in the URL fragment: `#login`,
//! `#posts/663a…`, `#create?edit=663a…`. [`Route::parse`] maps a fragment to
//! a [`Route`] and [`Route::to_fragment`] maps back. Anything unrecognized
//! lands on the posts list, so a stale or mistyped link degrades to the home
//! page instead of a client-side 404.
//!
//! [`RouterProvider`] owns the route as a signal, parsed once at mount and
//! re-parsed on every `hashchange`. Components navigate by rewriting the
//! fragment with [`navigate`]; the browser event brings the signal up to
//! date, so the address bar stays the single source of truth and back/forward
//! work for free.

use dioxus::prelude::*;

/// One page of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Paginated post list, the home page.
    Posts,
    /// A single post with its comments.
    PostDetail { id: String },
    /// Create form, or edit form when `edit` names a post.
    Compose { edit: Option<String> },
    Login,
    Register,
}

impl Route {
    /// Map a location fragment (with or without the leading `#`) to a route.
    pub fn parse(fragment: &str) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, query),
            None => (raw, ""),
        };

        match path {
            "" => Route::Posts,
            "login" => Route::Login,
            "register" => Route::Register,
            "create" => Route::Compose {
                edit: query_param(query, "edit"),
            },
            _ => match path.strip_prefix("posts/") {
                Some(rest) => {
                    let id = rest.split('/').next().unwrap_or_default();
                    if id.is_empty() {
                        Route::Posts
                    } else {
                        Route::PostDetail { id: id.to_string() }
                    }
                }
                None => Route::Posts,
            },
        }
    }

    /// The fragment for this route, without the leading `#`. Inverse of
    /// [`Route::parse`] for every route value.
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Posts => String::new(),
            Route::Login => "login".to_string(),
            Route::Register => "register".to_string(),
            Route::Compose { edit: None } => "create".to_string(),
            Route::Compose { edit: Some(id) } => {
                format!("create?edit={}", urlencoding::encode(id))
            }
            Route::PostDetail { id } => format!("posts/{id}"),
        }
    }
}

/// Split a query string into decoded key/value pairs. A key without `=`
/// reads as an empty value.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Percent-decode one query component, with `+` read as a space. Undecodable
/// input falls back to the raw text.
fn decode_component(raw: &str) -> String {
    let with_spaces = raw.replace('+', " ");
    urlencoding::decode(&with_spaces)
        .unwrap_or(std::borrow::Cow::Borrowed(with_spaces.as_str()))
        .into_owned()
}

/// Last value for `name` in the query string. Empty values count as absent.
fn query_param(query: &str, name: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// The fragment of the current browser location. Empty outside a browser.
pub fn current_fragment() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Navigate by rewriting the fragment. The `hashchange` listener installed
/// by [`RouterProvider`] picks the change up and swaps the page.
pub fn navigate(route: Route) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.to_fragment());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("navigate to #{}", route.to_fragment());
    }
}

/// Owns the route signal and keeps it in sync with the address bar.
#[component]
pub fn RouterProvider(children: Element) -> Element {
    let route = use_signal(|| Route::parse(&current_fragment()));
    use_context_provider(|| route);

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let mut route = route;
            if let Some(window) = web_sys::window() {
                gloo_events::EventListener::new(&window, "hashchange", move |_| {
                    route.set(Route::parse(&current_fragment()));
                })
                .forget();
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = route;
        }
    });

    rsx! {
        {children}
    }
}

/// The current route. Reading it subscribes the caller to navigation.
pub fn use_route() -> Signal<Route> {
    use_context::<Signal<Route>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_level_pages() {
        assert_eq!(Route::parse(""), Route::Posts);
        assert_eq!(Route::parse("#"), Route::Posts);
        assert_eq!(Route::parse("#login"), Route::Login);
        assert_eq!(Route::parse("#register"), Route::Register);
        assert_eq!(Route::parse("login"), Route::Login);
    }

    #[test]
    fn test_parse_post_detail() {
        assert_eq!(
            Route::parse("#posts/663a1b2c"),
            Route::PostDetail {
                id: "663a1b2c".to_string()
            }
        );
        // Trailing segments beyond the id are ignored.
        assert_eq!(
            Route::parse("#posts/663a1b2c/extra"),
            Route::PostDetail {
                id: "663a1b2c".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_post_id_falls_back_to_list() {
        assert_eq!(Route::parse("#posts/"), Route::Posts);
    }

    #[test]
    fn test_parse_create_modes() {
        assert_eq!(Route::parse("#create"), Route::Compose { edit: None });
        assert_eq!(
            Route::parse("#create?edit=663a1b2c"),
            Route::Compose {
                edit: Some("663a1b2c".to_string())
            }
        );
        // An empty edit value means plain create mode.
        assert_eq!(Route::parse("#create?edit="), Route::Compose { edit: None });
    }

    #[test]
    fn test_parse_query_decoding() {
        assert_eq!(
            Route::parse("#create?edit=a%2Fb+c"),
            Route::Compose {
                edit: Some("a/b c".to_string())
            }
        );
    }

    #[test]
    fn test_parse_repeated_params_keep_last() {
        assert_eq!(
            Route::parse("#create?edit=first&edit=second"),
            Route::Compose {
                edit: Some("second".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_fragments_land_on_posts() {
        assert_eq!(Route::parse("#nonsense"), Route::Posts);
        assert_eq!(Route::parse("#posts"), Route::Posts);
        assert_eq!(Route::parse("#settings/profile"), Route::Posts);
    }

    #[test]
    fn test_fragments_round_trip() {
        let routes = [
            Route::Posts,
            Route::Login,
            Route::Register,
            Route::Compose { edit: None },
            Route::Compose {
                edit: Some("663a1b2c".to_string()),
            },
            Route::PostDetail {
                id: "663a1b2c".to_string(),
            },
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.to_fragment()), route);
        }
    }

    #[test]
    fn test_edit_ids_survive_encoding() {
        let route = Route::Compose {
            edit: Some("odd id/with?chars".to_string()),
        };
        assert_eq!(Route::parse(&route.to_fragment()), route);
    }
}
