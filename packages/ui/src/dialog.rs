//! Blocking confirmation dialog for destructive actions.

/// Ask the user to confirm before a delete. Outside a browser there is nobody
/// to ask, so the answer is always no.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}
