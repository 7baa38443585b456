// CLI integration tests for daemon-independent flows.
use std::process::Command;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_notigate");
    Command::new(exe)
}

#[test]
fn no_arguments_prints_help_with_usage_exit_code() {
    let output = cmd().output().expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn help_lists_commands() {
    let output = cmd().arg("--help").output().expect("run");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("send"));
    assert!(text.contains("server-info"));
    assert!(text.contains("completion"));
}

#[test]
fn send_without_summary_is_a_usage_error() {
    let output = cmd().arg("send").output().expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn completion_emits_a_script_for_bash() {
    let output = cmd().args(["completion", "bash"]).output().expect("run");
    assert!(output.status.success());
    let script = String::from_utf8_lossy(&output.stdout);
    assert!(script.contains("notigate"));
}

#[test]
fn completion_rejects_unknown_shell() {
    let output = cmd().args(["completion", "ksh93"]).output().expect("run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn version_flag_reports_crate_version() {
    let output = cmd().arg("--version").output().expect("run");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
}
