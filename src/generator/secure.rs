//! Generator backed by the operating system's secure random source
//!
//! This is the preferred generator on every platform that exposes a
//! cryptographically secure random-byte primitive natively: `getrandom(2)`
//! on Linux, `arc4random_buf` on macOS, `BCryptGenRandom` on Windows. The
//! primitive is consumed through the crate's `os` layer; this module only
//! implements the capability contract and the degrade policy around it.

use crate::generator::{Generator, Priority, zero_pad};
use crate::os;

/// Random-byte generator delegating to the platform secure source.
///
/// Stateless: each call to [`Generator::generate`] is independently
/// satisfied by the OS primitive, with no buffering or carry-over between
/// calls. Concurrent callers need no coordination.
#[derive(Debug, Default)]
pub struct SecureGenerator;

impl SecureGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for SecureGenerator {
    fn generate(&self, byte_count: usize) -> Vec<u8> {
        let mut bytes = Vec::new();

        if Self::is_supported() {
            let mut buf = vec![0u8; byte_count];
            if os::sys_random(&mut buf).is_ok() {
                bytes = buf;
            }
        }

        zero_pad(bytes, byte_count)
    }

    fn is_supported() -> bool {
        os::is_available()
    }

    fn priority() -> Priority {
        Priority::High
    }
}
