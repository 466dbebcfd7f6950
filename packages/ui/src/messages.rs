//! Transient status toasts and the inline load-failure panel.
//!
//! One toast is visible at a time, rendered in a fixed overlay and auto-hidden
//! after five seconds on the web. Showing a new message restarts the clock; an
//! older message's timer never hides a newer message.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    /// Lets the dismiss timer tell this message apart from a newer one with
    /// identical text.
    serial: u64,
}

/// Handle for showing toasts. Copy, so event handlers can capture it freely.
#[derive(Clone, Copy, PartialEq)]
pub struct Messages {
    current: Signal<Option<Message>>,
    serial: Signal<u64>,
}

impl Messages {
    pub fn success(&self, text: impl Into<String>) {
        self.show(text.into(), MessageKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), MessageKind::Error);
    }

    fn show(&self, text: String, kind: MessageKind) {
        let mut serial_signal = self.serial;
        let serial = serial_signal.peek().wrapping_add(1);
        serial_signal.set(serial);

        let mut current = self.current;
        current.set(Some(Message { text, kind, serial }));

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
            let expired = current
                .peek()
                .as_ref()
                .is_some_and(|message| message.serial == serial);
            if expired {
                current.set(None);
            }
        });
    }
}

/// Get the toast handle.
/// Panics when called outside a [`MessageProvider`].
pub fn use_messages() -> Messages {
    use_context::<Messages>()
}

/// Provider component owning the single toast slot.
#[component]
pub fn MessageProvider(children: Element) -> Element {
    let current = use_signal(|| Option::<Message>::None);
    let serial = use_signal(|| 0u64);
    use_context_provider(|| Messages { current, serial });

    rsx! {
        {children}
    }
}

/// Fixed overlay that renders the current toast, if any.
#[component]
pub fn MessageToast() -> Element {
    let messages = use_messages();

    let Some(message) = (messages.current)() else {
        return rsx! {};
    };
    let class = format!("message-modal {}", message.kind.class());

    rsx! {
        div {
            class: "{class}",
            "{message.text}"
        }
    }
}

/// Inline error panel shown in place of page content when a load fails. The
/// message is rendered as a text node, so markup inside it shows as literal
/// text.
#[component]
pub fn ErrorBlock(message: String) -> Element {
    rsx! {
        p {
            class: "error-block",
            "Error: {message}"
        }
    }
}
