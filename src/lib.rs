//! Secure random byte generation with pluggable, priority-ranked generators
//!
//! This crate provides a small facade for obtaining cryptographically secure
//! random bytes. It does not implement a CSPRNG of its own: every generator
//! defers to a trusted secure-random primitive supplied by the host platform,
//! and the crate's real job is deciding *which* generator to use.
//!
//! Each generator advertises two things without being instantiated: whether
//! it is supported on the current platform, and a fixed priority. A selector
//! enumerates the known generators, filters to the supported ones, and picks
//! the highest-priority candidate to satisfy a byte-generation request.
//!
//! # Module overview
//!
//! - `generator`
//!   The capability contract every random-byte source must satisfy
//!   (generate bytes, report support, report priority), the ordered
//!   priority scale, and the concrete generator implementations.
//!
//! - `selector`
//!   The registry of known generators and the selection policy: filter by
//!   platform support, rank by priority, break ties by registration order.
//!
//! - `os` (internal)
//!   Platform-specific access to the operating system's secure random
//!   source, selected at compile time. Higher-level code never touches OS
//!   APIs directly.
//!
//! # Degrade policy
//!
//! Generators never fail. An unsupported platform or a primitive error
//! degrades to zero-padded output of the requested length, so callers always
//! receive exactly as many bytes as they asked for. A caller that needs a
//! guarantee of entropy must check `is_supported` before generating; a
//! successful-looking all-zero result is otherwise indistinguishable from
//! genuine output.
//!
//! # Design goals
//!
//! - Stateless generators: every call is independent, no buffering or
//!   carry-over, safe to invoke from any number of threads
//! - Capability queries (support, priority) answerable without constructing
//!   a generator
//! - Minimal and explicit APIs

mod os;

pub mod generator;
pub mod selector;

pub use generator::{Descriptor, Generator, Priority};
pub use selector::random_bytes;
