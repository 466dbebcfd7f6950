use dioxus::prelude::*;

use api::{Post, PostsPage, User};
use ui::format::{excerpt, format_date};
use ui::{use_api, use_session, ErrorBlock};

use crate::router::{navigate, Route};

/// Paginated list of the latest posts, the home page.
#[component]
pub fn Posts() -> Element {
    let session = use_session();
    let api = use_api();
    let mut page = use_signal(|| 1u32);

    let viewer = session.user();

    let listing = use_resource(move || {
        let api = api.clone();
        let page = page();
        async move { api.fetch_posts(page).await.map_err(|err| err.to_string()) }
    });

    let state = (*listing.read()).clone();

    let body = match state {
        None => rsx! {
            div { class: "post-list", "Loading posts..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBlock { message }
        },
        Some(Ok(data)) => {
            let PostsPage {
                posts,
                page: current,
                pages,
            } = data;

            if posts.is_empty() {
                rsx! {
                    div { class: "post-list",
                        p { "No posts found." }
                    }
                }
            } else {
                rsx! {
                    div { class: "post-list",
                        for post in posts {
                            PostCard {
                                key: "{post.id}",
                                viewer: viewer.clone(),
                                post,
                            }
                        }
                    }
                    Pagination {
                        current,
                        pages,
                        on_select: move |n: u32| page.set(n),
                    }
                }
            }
        }
    };

    rsx! {
        h2 { "Latest Posts" }
        {body}
    }
}

/// One list entry: clickable title, excerpt, byline, like tally.
#[component]
fn PostCard(post: Post, viewer: Option<User>) -> Element {
    let liked = viewer
        .as_ref()
        .is_some_and(|viewer| post.liked_by(viewer));
    let count_class = if liked { "like-count liked" } else { "like-count" };
    let likes = post.like_count();

    let title = if post.title.is_empty() {
        "Untitled".to_string()
    } else {
        post.title.clone()
    };
    let summary = excerpt(&post.content);
    let byline = format!(
        "by {} on {}",
        post.author_name(),
        format_date(&post.created_at)
    );

    let id = post.id.clone();

    rsx! {
        article {
            class: "post-card",
            h3 {
                onclick: move |_| navigate(Route::PostDetail { id: id.clone() }),
                "{title}"
            }
            p { "{summary}" }
            div {
                class: "post-meta",
                span { "{byline}" }
                span {
                    class: "{count_class}",
                    "{likes}"
                }
            }
        }
    }
}

/// Numbered page buttons, one per page, current one highlighted.
#[component]
fn Pagination(current: u32, pages: u32, on_select: EventHandler<u32>) -> Element {
    rsx! {
        div {
            class: "pagination",
            for n in 1..=pages {
                button {
                    key: "{n}",
                    class: if n == current { "active" },
                    onclick: move |_| on_select.call(n),
                    "{n}"
                }
            }
        }
    }
}
