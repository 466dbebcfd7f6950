use dioxus::prelude::*;

use ui::{use_api, use_messages, use_session};

use crate::router::{navigate, Route};

/// Which face of the shared auth form is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Login and register share one form component; the mode picks the fields,
/// the endpoint, and where to go afterwards. Registration never signs the
/// user in, it hands off to the login page.
#[component]
pub fn AuthPage(mode: AuthMode) -> Element {
    let session = use_session();
    let api = use_api();
    let messages = use_messages();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let is_login = mode == AuthMode::Login;
    let heading = if is_login { "Login" } else { "Register" };

    let submit_api = api.clone();
    let submit_session = session.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let api = submit_api.clone();
        let session = submit_session.clone();
        spawn(async move {
            busy.set(true);
            if is_login {
                let email = email().trim().to_string();
                let password = password().trim().to_string();
                match api.login(&email, &password).await {
                    Ok((user, token)) => {
                        session.sign_in(user, &token);
                        messages.success("Login successful");
                        navigate(Route::Posts);
                    }
                    Err(err) => messages.error(err.to_string()),
                }
            } else {
                let username = username().trim().to_string();
                let email = email().trim().to_string();
                let password = password().trim().to_string();
                match api.register(&username, &email, &password).await {
                    Ok(()) => {
                        messages.success("Registration successful — please login");
                        navigate(Route::Login);
                    }
                    Err(err) => messages.error(err.to_string()),
                }
            }
            busy.set(false);
        });
    };

    let switch_target = if is_login {
        Route::Register
    } else {
        Route::Login
    };
    let switch_prompt = if is_login {
        "Need an account?"
    } else {
        "Already have an account?"
    };
    let switch_label = if is_login { "Register" } else { "Login" };

    rsx! {
        div {
            class: "auth-form",
            h2 { "{heading}" }
            form {
                id: "auth-form",
                onsubmit: on_submit,
                if !is_login {
                    div {
                        class: "form-field",
                        label { "Username" }
                        input {
                            r#type: "text",
                            name: "username",
                            required: true,
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        name: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        name: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Please wait..." } else { "{heading}" }
                }
            }
            p {
                class: "switch-form",
                "{switch_prompt} "
                a {
                    onclick: move |evt| {
                        evt.prevent_default();
                        navigate(switch_target.clone());
                    },
                    "{switch_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ui::{MessageProvider, SessionProvider};

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_login_form_fields() {
        fn app() -> Element {
            rsx! {
                SessionProvider {
                    MessageProvider {
                        AuthPage { mode: AuthMode::Login }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Login"));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"password\""));
        assert!(!html.contains("name=\"username\""));
        assert!(html.contains("Need an account?"));
    }

    #[test]
    fn test_register_form_fields() {
        fn app() -> Element {
            rsx! {
                SessionProvider {
                    MessageProvider {
                        AuthPage { mode: AuthMode::Register }
                    }
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Register"));
        assert!(html.contains("name=\"username\""));
        assert!(html.contains("Already have an account?"));
    }
}
