//! Purpose: C ABI bridge for managed-runtime callers (libnotigate).
//! Exports: `ntg_initialize`, `ntg_show`, `ntg_destroy`, `ntg_string_free`.
//! Role: Stable ABI surface preserving the three-call lifecycle contract.
//! Invariants: One process-wide notifier guarded by a single mutex.
//! Invariants: Strings returned to the caller are freed only via `ntg_string_free`.
//! Invariants: Null or non-UTF-8 arguments surface as errors, never undefined behavior.

use crate::api::{Content, DesktopNotifier, FALLBACK_DISPLAY_MESSAGE, surface_message};
use crate::core::error::{Error, ErrorKind};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

static NOTIFIER: Mutex<Option<DesktopNotifier>> = Mutex::new(None);

/// Initialize the process-wide notification subsystem under `app_name`.
/// Returns 1 on success and 0 on failure (no daemon, bad argument).
#[unsafe(no_mangle)]
pub extern "C" fn ntg_initialize(app_name: *const c_char) -> i32 {
    let app_name = match borrow_str(app_name, "app_name") {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "rejected initialize argument");
            return 0;
        }
    };
    let mut guard = lock_notifier();
    let notifier = guard.get_or_insert_with(DesktopNotifier::new);
    match notifier.initialize(app_name) {
        Ok(()) => 1,
        Err(err) => {
            tracing::warn!(error = %err, "notification subsystem failed to initialize");
            0
        }
    }
}

/// Show or update the process-wide notification. Returns null on success,
/// otherwise a newly allocated error message the caller must release with
/// `ntg_string_free`.
#[unsafe(no_mangle)]
pub extern "C" fn ntg_show(
    summary: *const c_char,
    body: *const c_char,
    icon: *const c_char,
) -> *mut c_char {
    let content = match parse_content(summary, body, icon) {
        Ok(content) => content,
        Err(err) => return error_string(&err),
    };
    let mut guard = lock_notifier();
    let Some(notifier) = guard.as_mut() else {
        return error_string(
            &Error::new(ErrorKind::Usage).with_message("notifier is not initialized"),
        );
    };
    match notifier.show(&content) {
        Ok(()) => ptr::null_mut(),
        Err(err) => error_string(&err),
    }
}

/// Release the process-wide subsystem and the tracked notification.
/// Safe to call at any time, including before a successful initialize.
#[unsafe(no_mangle)]
pub extern "C" fn ntg_destroy() {
    let mut guard = lock_notifier();
    if let Some(notifier) = guard.as_mut() {
        notifier.destroy();
    }
}

/// Release a string previously returned by `ntg_show`. Null is accepted.
#[unsafe(no_mangle)]
pub extern "C" fn ntg_string_free(message: *mut c_char) {
    if message.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(message));
    }
}

fn lock_notifier() -> MutexGuard<'static, Option<DesktopNotifier>> {
    // A poisoned lock still holds a coherent notifier; keep serving it.
    NOTIFIER.lock().unwrap_or_else(PoisonError::into_inner)
}

fn parse_content(
    summary: *const c_char,
    body: *const c_char,
    icon: *const c_char,
) -> Result<Content, Error> {
    Ok(Content::new(
        borrow_str(summary, "summary")?,
        borrow_str(body, "body")?,
        borrow_str(icon, "icon")?,
    ))
}

fn borrow_str<'a>(input: *const c_char, what: &str) -> Result<&'a str, Error> {
    if input.is_null() {
        return Err(Error::new(ErrorKind::Usage).with_message(format!("{what} is null")));
    }
    unsafe { CStr::from_ptr(input) }
        .to_str()
        .map_err(|_| Error::new(ErrorKind::Usage).with_message(format!("{what} is not valid UTF-8")))
}

fn error_string(err: &Error) -> *mut c_char {
    match CString::new(surface_message(err)) {
        Ok(message) => message.into_raw(),
        // A message with interior NUL still has to read as a failure.
        Err(_) => match CString::new(FALLBACK_DISPLAY_MESSAGE) {
            Ok(message) => message.into_raw(),
            Err(_) => ptr::null_mut(),
        },
    }
}
