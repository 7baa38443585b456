//! Purpose: Abstract the desktop notification daemon behind a backend trait.
//! Exports: `Content`, `ServerInfo`, `DaemonBackend`, `DesktopDaemon`, `server_info`.
//! Role: Seam between the notifier lifecycle and the freedesktop notification bus.
//! Invariants: One backend handle maps to one visible notification.
//! Invariants: Showing with an occupied slot replaces that notification in place.
//! Invariants: Unsupported platforms surface as `ErrorKind::Unavailable`.

use crate::core::error::{Error, ErrorKind};
use serde::Serialize;

/// The atomic triple applied by every show request. Empty strings are
/// legal values and are passed to the daemon unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Content {
    pub summary: String,
    pub body: String,
    pub icon: String,
}

impl Content {
    pub fn new(
        summary: impl Into<String>,
        body: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            body: body.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub spec_version: String,
}

pub trait DaemonBackend {
    type Handle;

    fn init(&mut self, app_name: &str) -> Result<(), Error>;

    /// Show `content`, replacing the notification identified by `slot` when
    /// one is present. Returns the handle the slot should track afterwards.
    fn show(&mut self, slot: Option<&Self::Handle>, content: &Content)
    -> Result<Self::Handle, Error>;

    fn uninit(&mut self);
}

/// Backend reaching the freedesktop notification daemon over the session bus.
#[derive(Clone, Debug, Default)]
pub struct DesktopDaemon {
    app_name: Option<String>,
}

impl DesktopDaemon {
    pub fn new() -> Self {
        Self { app_name: None }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
impl DaemonBackend for DesktopDaemon {
    type Handle = u32;

    fn init(&mut self, app_name: &str) -> Result<(), Error> {
        let info = server_info()?;
        tracing::debug!(daemon = %info.name, app_name, "notification subsystem initialized");
        self.app_name = Some(app_name.to_string());
        Ok(())
    }

    fn show(&mut self, slot: Option<&u32>, content: &Content) -> Result<u32, Error> {
        let mut notification = notify_rust::Notification::new();
        notification
            .summary(&content.summary)
            .body(&content.body)
            .icon(&content.icon);
        if let Some(app_name) = &self.app_name {
            notification.appname(app_name);
        }
        if let Some(id) = slot {
            // Reusing the daemon-assigned id replaces the visible
            // notification instead of stacking a second one.
            notification.id(*id);
        }
        let handle = notification.show().map_err(|err| {
            let message = err.to_string();
            Error::new(ErrorKind::Display)
                .with_message(message)
                .with_source(err)
        })?;
        Ok(handle.id())
    }

    fn uninit(&mut self) {
        self.app_name = None;
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
impl DaemonBackend for DesktopDaemon {
    type Handle = u32;

    fn init(&mut self, _app_name: &str) -> Result<(), Error> {
        Err(unsupported())
    }

    fn show(&mut self, _slot: Option<&u32>, _content: &Content) -> Result<u32, Error> {
        Err(unsupported())
    }

    fn uninit(&mut self) {}
}

#[cfg(all(unix, not(target_os = "macos")))]
pub fn server_info() -> Result<ServerInfo, Error> {
    let info = notify_rust::get_server_information().map_err(|err| {
        let message = err.to_string();
        Error::new(ErrorKind::Unavailable)
            .with_message(message)
            .with_hint("Check that a notification daemon is running on the session bus.")
            .with_source(err)
    })?;
    Ok(ServerInfo {
        name: info.name,
        vendor: info.vendor,
        version: info.version,
        spec_version: info.spec_version,
    })
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
pub fn server_info() -> Result<ServerInfo, Error> {
    Err(unsupported())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn unsupported() -> Error {
    Error::new(ErrorKind::Unavailable)
        .with_message("desktop notifications are not supported on this platform")
}

#[cfg(test)]
mod tests {
    use super::Content;

    #[test]
    fn content_permits_empty_fields() {
        let content = Content::new("", "", "");
        assert_eq!(content.summary, "");
        assert_eq!(content.body, "");
        assert_eq!(content.icon, "");
    }

    #[test]
    fn content_serializes_all_fields() {
        let content = Content::new("Hello", "World", "icon.png");
        let value = serde_json::to_value(&content).expect("serialize");
        assert_eq!(value["summary"], "Hello");
        assert_eq!(value["body"], "World");
        assert_eq!(value["icon"], "icon.png");
    }
}
