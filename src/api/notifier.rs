//! Purpose: Own the single-slot notification lifecycle shared by the ABI and CLI.
//! Exports: `Notifier`, `DesktopNotifier`, `Phase`, `surface_message`, `FALLBACK_DISPLAY_MESSAGE`.
//! Role: Keep the single visible notification in one owned, testable context object.
//! Invariants: At most one backend handle is tracked at a time.
//! Invariants: A show with an occupied slot replaces the visible notification, never adds one.
//! Invariants: Destroy clears the slot; shows after destroy are phase errors.

use crate::core::daemon::{Content, DaemonBackend, DesktopDaemon};
use crate::core::error::{Error, ErrorKind};

/// Substituted when a failed display reports no message of its own, so a
/// failure is always distinguishable from success at the boundary.
pub const FALLBACK_DISPLAY_MESSAGE: &str = "notification display failed";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Destroyed,
}

pub type DesktopNotifier = Notifier<DesktopDaemon>;

pub struct Notifier<B: DaemonBackend> {
    backend: B,
    phase: Phase,
    slot: Option<B::Handle>,
}

impl Notifier<DesktopDaemon> {
    pub fn new() -> Self {
        Self::with_backend(DesktopDaemon::new())
    }
}

impl Default for Notifier<DesktopDaemon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: DaemonBackend> Notifier<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            phase: Phase::Uninitialized,
            slot: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a previously shown notification is being tracked.
    pub fn has_active(&self) -> bool {
        self.slot.is_some()
    }

    /// Probe the daemon and record the application name for later shows.
    /// Accepted from any phase; after a destroy this starts a fresh
    /// lifecycle with an empty slot.
    pub fn initialize(&mut self, app_name: &str) -> Result<(), Error> {
        self.backend.init(app_name)?;
        self.phase = Phase::Initialized;
        Ok(())
    }

    /// Show `content`, creating the tracked notification on first use and
    /// replacing it in place on every later call.
    pub fn show(&mut self, content: &Content) -> Result<(), Error> {
        match self.phase {
            Phase::Initialized => {}
            Phase::Uninitialized => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message("notifier is not initialized")
                    .with_hint("Call initialize before show."));
            }
            Phase::Destroyed => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message("notifier was destroyed")
                    .with_hint("Initialize again to show further notifications."));
            }
        }
        let replaced = self.slot.is_some();
        let handle = match self.backend.show(self.slot.as_ref(), content) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(error = %err, "notification display failed");
                return Err(err);
            }
        };
        self.slot = Some(handle);
        tracing::debug!(summary = %content.summary, replaced, "notification shown");
        Ok(())
    }

    /// Release daemon resources and clear the tracked notification.
    pub fn destroy(&mut self) {
        self.slot = None;
        self.backend.uninit();
        self.phase = Phase::Destroyed;
        tracing::debug!("notification subsystem released");
    }
}

/// Message handed across the boundary for a failed operation: the error's
/// own message when it has one, the fallback otherwise.
pub fn surface_message(err: &Error) -> &str {
    match err.message() {
        Some(message) if !message.is_empty() => message,
        _ => FALLBACK_DISPLAY_MESSAGE,
    }
}
