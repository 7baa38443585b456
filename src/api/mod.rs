//! Purpose: Define the stable public Rust API boundary for notigate.
//! Exports: Notifier lifecycle plus the error and content types bindings need.
//! Role: Public, additive-only surface; hides daemon transport details.
//! Invariants: This module is the only public path to daemon access.
//! Invariants: Internal transport choices may change without touching this surface.

mod notifier;

pub use crate::core::daemon::{Content, DaemonBackend, DesktopDaemon, ServerInfo, server_info};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use notifier::{
    DesktopNotifier, FALLBACK_DISPLAY_MESSAGE, Notifier, Phase, surface_message,
};
