//! Purpose: Shared core library crate used by the `notigate` CLI and ABI bridge.
//! Exports: `core` (daemon backend, errors), `api` (notifier lifecycle), `abi` (C surface).
//! Role: Internal library backing the binary and the cdylib; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: All daemon access goes through `core::daemon::DaemonBackend`.
pub mod abi;
pub mod api;
pub mod core;
