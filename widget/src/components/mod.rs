//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shell's state signal and forward user intents to the
//! shell, which is provided as context by `app::WidgetRoot`.

pub mod chat_panel;
pub mod faq_panel;
pub mod launcher;
pub mod panel;
pub mod quiz_panel;
pub mod token_banner;

use std::future::Future;

/// Run a shell intent on the browser's task queue. Native builds have no
/// event loop to drive it, so the future is dropped.
pub(crate) fn spawn_intent(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}
