use dioxus::html::HasFileData;
use dioxus::prelude::dioxus_elements::FileEngine;
use dioxus::prelude::*;

use api::PostForm;
use ui::{use_api, use_messages, use_session};

use crate::router::{navigate, Route};

/// Create form, or edit form when `edit` names a post id.
///
/// Signed-out visitors are bounced to the login page before any request is
/// made. Edit mode pre-fills title and content from the server; the image
/// input always starts empty and only a newly chosen file is uploaded.
#[component]
pub fn Compose(edit: Option<String>) -> Element {
    let session = use_session();
    let api = use_api();
    let messages = use_messages();

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut image = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut busy = use_signal(|| false);

    // Redirect decided once at mount; a mid-page sign-out must not re-fire
    // it over the message of whoever signed the session out.
    let signed_in_at_mount = use_hook(|| session.user().is_some());
    use_effect(move || {
        if !signed_in_at_mount {
            messages.error("You must be logged in to create a post");
            navigate(Route::Login);
        }
    });

    let _prefill = use_resource({
        let api = api.clone();
        let session = session.clone();
        let edit = edit.clone();
        move || {
            let api = api.clone();
            let edit = edit.clone();
            let signed_in = session.user().is_some();
            async move {
                let Some(id) = edit else { return };
                if !signed_in {
                    return;
                }
                match api.fetch_post(&id).await {
                    Ok(post) => {
                        title.set(post.title);
                        content.set(post.content);
                    }
                    Err(_) => messages.error("Could not load post for editing"),
                }
            }
        }
    });

    if session.user().is_none() {
        return rsx! {};
    }

    let is_edit = edit.is_some();
    let heading = if is_edit { "Edit Post" } else { "Create Post" };

    let on_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else { return };
        let Some(name) = engine.files().first().cloned() else {
            image.set(None);
            return;
        };
        if let Some(bytes) = engine.read_file(&name).await {
            image.set(Some((name, bytes)));
        }
    };

    let submit_api = api.clone();
    let submit_session = session.clone();
    let submit_edit = edit.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let api = submit_api.clone();
        let session = submit_session.clone();
        let edit = submit_edit.clone();
        spawn(async move {
            busy.set(true);
            let form = PostForm {
                title: title(),
                content: content(),
                image: image(),
            };

            let result = match &edit {
                Some(id) => api.update_post(id, form).await,
                None => api.create_post(form).await,
            };
            busy.set(false);

            match result {
                Ok(()) => match edit {
                    Some(id) => {
                        messages.success("Post updated");
                        navigate(Route::PostDetail { id });
                    }
                    None => {
                        messages.success("Post created");
                        navigate(Route::Posts);
                    }
                },
                Err(err) => {
                    let text = err.to_string();
                    if api::error::is_auth_error(&text) {
                        session.sign_out();
                        messages.error("Authentication error, please login again");
                        navigate(Route::Login);
                    } else {
                        messages.error(text);
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "compose-page",
            h2 { "{heading}" }
            form {
                id: "create-post-form",
                onsubmit: on_submit,
                div {
                    class: "form-field",
                    label { "Title" }
                    input {
                        r#type: "text",
                        name: "title",
                        required: true,
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Content" }
                    textarea {
                        name: "content",
                        required: true,
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Image" }
                    input {
                        r#type: "file",
                        name: "image",
                        accept: "image/*",
                        onchange: on_file,
                    }
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() {
                        "Saving..."
                    } else if is_edit {
                        "Update Post"
                    } else {
                        "Publish Post"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::NoOpMutations;

    use api::User;
    use store::{MemoryStore, Session};
    use ui::{MessageProvider, MessageToast, SessionProvider};

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_settled(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        // Let queued effects and the re-renders they trigger run.
        for _ in 0..3 {
            dom.render_immediate(&mut NoOpMutations);
        }
        dioxus_ssr::render(&dom)
    }

    fn seeded_session() -> Session {
        let session = Session::new(MemoryStore::new());
        let user = User {
            id: "u1".to_string(),
            username: "ada".to_string(),
        };
        api::auth::set_auth_data(&session, &user, "tok-1");
        session
    }

    #[test]
    fn test_signed_out_visitors_get_no_form() {
        fn app() -> Element {
            rsx! {
                SessionProvider {
                    MessageProvider {
                        Compose { edit: None::<String> }
                    }
                }
            }
        }

        let html = render(app);
        assert!(!html.contains("<form"));
        assert!(!html.contains("Create Post"));
    }

    #[test]
    fn test_signed_in_create_mode() {
        fn app() -> Element {
            let session = use_hook(seeded_session);
            rsx! {
                SessionProvider {
                    session: Some(session),
                    MessageProvider {
                        Compose { edit: None::<String> }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Create Post"));
        assert!(html.contains("Publish Post"));
        assert!(html.contains("create-post-form"));
    }

    #[test]
    fn test_edit_mode_heading_and_button() {
        fn app() -> Element {
            let session = use_hook(seeded_session);
            rsx! {
                SessionProvider {
                    session: Some(session),
                    MessageProvider {
                        Compose { edit: Some("p1".to_string()) }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Edit Post"));
        assert!(html.contains("Update Post"));
    }

    #[test]
    fn test_auth_failure_toast_survives_sign_out() {
        // Replays what a rejected submit does: sign out, show its own
        // message, redirect. The entry guard must not overwrite the message.
        #[component]
        fn AuthFailureRecovery() -> Element {
            let session = use_session();
            let messages = use_messages();
            use_hook(move || {
                session.sign_out();
                messages.error("Authentication error, please login again");
                navigate(Route::Login);
            });
            rsx! {}
        }

        fn app() -> Element {
            let session = use_hook(seeded_session);
            rsx! {
                SessionProvider {
                    session: Some(session),
                    MessageProvider {
                        Compose { edit: None::<String> }
                        AuthFailureRecovery {}
                        MessageToast {}
                    }
                }
            }
        }

        let html = render_settled(app);
        assert!(!html.contains("<form"));
        assert!(html.contains("Authentication error, please login again"));
        assert!(!html.contains("You must be logged in to create a post"));
    }
}
