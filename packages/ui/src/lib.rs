//! Shared UI building blocks for the workspace.

mod session;
pub use session::{use_api, use_session, SessionHandle, SessionProvider};

mod messages;
pub use messages::{
    use_messages, ErrorBlock, Message, MessageKind, MessageProvider, MessageToast, Messages,
};

mod dialog;
pub use dialog::confirm;

pub mod format;
