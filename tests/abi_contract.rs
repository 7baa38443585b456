// ABI contract tests for marshaling and lifecycle guards; none of these
// require a notification daemon, so they hold on any machine.
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use notigate::abi::{ntg_destroy, ntg_initialize, ntg_show, ntg_string_free};

fn take_error(raw: *mut c_char) -> String {
    assert!(!raw.is_null(), "expected an error string");
    let text = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
    ntg_string_free(raw);
    text
}

#[test]
fn initialize_rejects_null_app_name() {
    assert_eq!(ntg_initialize(ptr::null()), 0);
}

#[test]
fn show_rejects_null_summary() {
    let body = CString::new("body").expect("cstring");
    let icon = CString::new("icon").expect("cstring");
    let raw = ntg_show(ptr::null(), body.as_ptr(), icon.as_ptr());
    assert_eq!(take_error(raw), "summary is null");
}

#[test]
fn show_rejects_null_icon() {
    let summary = CString::new("hello").expect("cstring");
    let body = CString::new("world").expect("cstring");
    let raw = ntg_show(summary.as_ptr(), body.as_ptr(), ptr::null());
    assert_eq!(take_error(raw), "icon is null");
}

#[test]
fn show_rejects_invalid_utf8_body() {
    let summary = CString::new("hello").expect("cstring");
    let body = CString::new(vec![0xf0u8, 0x28, 0x8c, 0x28]).expect("cstring");
    let icon = CString::new("icon").expect("cstring");
    let raw = ntg_show(summary.as_ptr(), body.as_ptr(), icon.as_ptr());
    assert_eq!(take_error(raw), "body is not valid UTF-8");
}

#[test]
fn show_before_initialize_reports_a_phase_error() {
    // No test in this binary ever calls ntg_initialize with a valid name,
    // so the process-wide notifier stays unset.
    let summary = CString::new("hello").expect("cstring");
    let body = CString::new("world").expect("cstring");
    let icon = CString::new("").expect("cstring");
    let raw = ntg_show(summary.as_ptr(), body.as_ptr(), icon.as_ptr());
    assert_eq!(take_error(raw), "notifier is not initialized");
}

#[test]
fn destroy_before_initialize_is_a_no_op() {
    ntg_destroy();
}

#[test]
fn string_free_accepts_null() {
    ntg_string_free(ptr::null_mut());
}
