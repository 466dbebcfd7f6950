use dioxus::prelude::*;

use api::{Comment, Post, User};
use ui::format::format_date;
use ui::{confirm, use_api, use_messages, use_session, ErrorBlock};

use crate::router::{navigate, Route};

/// Full view of one post: body, action row, comment thread.
///
/// The shell remounts this component per post id (the id is its render key),
/// so every signal below belongs to exactly one post and a slow load can
/// never paint a previously viewed post's screen.
#[component]
pub fn PostDetail(id: String) -> Element {
    let session = use_session();
    let api = use_api();
    let messages = use_messages();

    let mut reload = use_signal(|| 0u32);
    let mut comment_text = use_signal(String::new);

    let detail = use_resource({
        let api = api.clone();
        let id = id.clone();
        move || {
            let api = api.clone();
            let id = id.clone();
            reload();
            async move {
                api.fetch_post_with_comments(&id)
                    .await
                    .map_err(|err| err.to_string())
            }
        }
    });

    let viewer = session.user();
    let state = (*detail.read()).clone();

    match state {
        None => rsx! {
            p { "Loading post..." }
        },
        Some(Err(message)) => rsx! {
            ErrorBlock { message }
        },
        Some(Ok((post, comments))) => {
            let image_url = post.image.as_deref().map(|path| api.file_url(path));

            let signed_in = viewer.is_some();
            let like_api = api.clone();
            let like_id = id.clone();
            let on_like = move |_| {
                if !signed_in {
                    messages.error("You must log in to like");
                    return;
                }
                let api = like_api.clone();
                let id = like_id.clone();
                spawn(async move {
                    match api.toggle_like(&id).await {
                        Ok(()) => reload += 1,
                        Err(err) => messages.error(err.to_string()),
                    }
                });
            };

            let edit_id = id.clone();
            let on_edit = move |_| {
                navigate(Route::Compose {
                    edit: Some(edit_id.clone()),
                });
            };

            let delete_api = api.clone();
            let delete_id = id.clone();
            let on_delete = move |_| {
                if !confirm("Delete this post?") {
                    return;
                }
                let api = delete_api.clone();
                let id = delete_id.clone();
                spawn(async move {
                    match api.delete_post(&id).await {
                        Ok(()) => {
                            messages.success("Post deleted");
                            navigate(Route::Posts);
                        }
                        Err(err) => messages.error(err.to_string()),
                    }
                });
            };

            let comment_api = api.clone();
            let comment_post = id.clone();
            let on_submit_comment = move |evt: FormEvent| {
                evt.prevent_default();
                let content = comment_text().trim().to_string();
                if content.is_empty() {
                    messages.error("Comment cannot be empty");
                    return;
                }
                let api = comment_api.clone();
                let id = comment_post.clone();
                spawn(async move {
                    match api.add_comment(&id, &content).await {
                        Ok(()) => {
                            messages.success("Comment added");
                            comment_text.set(String::new());
                            reload += 1;
                        }
                        Err(err) => messages.error(err.to_string()),
                    }
                });
            };

            let delete_comment_api = api.clone();
            let on_delete_comment = move |comment_id: String| {
                if !confirm("Delete comment?") {
                    return;
                }
                let api = delete_comment_api.clone();
                spawn(async move {
                    match api.delete_comment(&comment_id).await {
                        Ok(()) => {
                            messages.success("Comment deleted");
                            reload += 1;
                        }
                        Err(err) => messages.error(err.to_string()),
                    }
                });
            };

            rsx! {
                PostBody {
                    post: post.clone(),
                    viewer: viewer.clone(),
                    image_url,
                    on_like,
                    on_edit,
                    on_delete,
                }
                div {
                    class: "comments-section",
                    h3 { "Comments" }
                    if signed_in {
                        form {
                            id: "comment-form",
                            class: "comment-form",
                            onsubmit: on_submit_comment,
                            textarea {
                                name: "content",
                                placeholder: "Write a comment...",
                                required: true,
                                value: comment_text(),
                                oninput: move |evt: FormEvent| comment_text.set(evt.value()),
                            }
                            button { class: "btn", r#type: "submit", "Add Comment" }
                        }
                    } else {
                        p { "You must be logged in to comment." }
                    }
                    CommentList {
                        comments,
                        viewer: viewer.clone(),
                        on_delete: on_delete_comment,
                    }
                }
            }
        }
    }
}

/// The post itself: title, byline, optional image, content, action row. Edit
/// and delete only show for the author.
#[component]
fn PostBody(
    post: Post,
    viewer: Option<User>,
    image_url: Option<String>,
    on_like: EventHandler<()>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let liked = viewer.as_ref().is_some_and(|viewer| post.liked_by(viewer));
    let is_author = viewer
        .as_ref()
        .is_some_and(|viewer| post.authored_by(viewer));
    let like_label = if liked { "Unlike" } else { "Like" };
    let likes = post.like_count();
    let byline = format!(
        "by {} on {}",
        post.author_name(),
        format_date(&post.created_at)
    );

    rsx! {
        div {
            class: "post-details",
            h1 { "{post.title}" }
            div { class: "post-meta", "{byline}" }
            if let Some(url) = &image_url {
                img { src: "{url}", alt: "{post.title}" }
            }
            p { "{post.content}" }
            div {
                class: "post-actions",
                button {
                    id: "like-btn",
                    class: "btn",
                    onclick: move |_| on_like.call(()),
                    "{like_label} ({likes})"
                }
                if is_author {
                    button {
                        id: "edit-post-btn",
                        class: "btn btn-secondary",
                        onclick: move |_| on_edit.call(()),
                        "Edit"
                    }
                    button {
                        id: "delete-post-btn",
                        class: "btn btn-danger",
                        onclick: move |_| on_delete.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// The comment thread, oldest first, with a per-comment delete for authors.
#[component]
fn CommentList(
    comments: Vec<Comment>,
    viewer: Option<User>,
    on_delete: EventHandler<String>,
) -> Element {
    if comments.is_empty() {
        return rsx! {
            div { class: "comment-list",
                p { "No comments yet." }
            }
        };
    }

    rsx! {
        div {
            class: "comment-list",
            for comment in comments {
                CommentCard {
                    key: "{comment.id}",
                    viewer: viewer.clone(),
                    on_delete: move |id| on_delete.call(id),
                    comment,
                }
            }
        }
    }
}

#[component]
fn CommentCard(comment: Comment, viewer: Option<User>, on_delete: EventHandler<String>) -> Element {
    let can_delete = viewer
        .as_ref()
        .is_some_and(|viewer| comment.authored_by(viewer));
    let byline = format!(
        "by {} on {}",
        comment.author_name(),
        format_date(&comment.created_at)
    );
    let comment_id = comment.id.clone();

    rsx! {
        div {
            class: "comment-card",
            p { "{comment.content}" }
            div {
                class: "comment-meta",
                span { "{byline}" }
                if can_delete {
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_delete.call(comment_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
