//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system's secure random source.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface,
//! allowing higher-level code to remain fully portable:
//!
//! - `sys_random` fills a buffer from the OS secure source, reporting
//!   failure through a `Result` rather than panicking, because the
//!   generators above this layer swallow failure by contract.
//! - `is_available` is a pure probe for the primitive, callable any number
//!   of times with the same answer on a fixed platform.
//!
//! Targets without a known secure source fall back to a stub that reports
//! the source as unavailable and fails every fill request.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub(crate) mod fallback;

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub(crate) use fallback::*;

/// The operating system could not satisfy a random-byte request.
///
/// Never crosses the public API: generators translate it into zero-padded
/// output.
#[derive(Debug)]
pub(crate) struct EntropyError;
