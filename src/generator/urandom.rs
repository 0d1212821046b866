//! Generator reading the kernel's `/dev/urandom` device directly
//!
//! A fallback for Unix hosts where the native primitive probe fails (for
//! example a Linux kernel old enough to lack `getrandom(2)`). Ranked below
//! [`SecureGenerator`](crate::generator::SecureGenerator) so it only wins
//! selection when the native primitive is unavailable.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::generator::{Generator, Priority, zero_pad};

const URANDOM_PATH: &str = "/dev/urandom";

/// Random-byte generator reading from `/dev/urandom`.
///
/// Stateless; the device is opened per call and never cached.
#[derive(Debug, Default)]
pub struct UrandomGenerator;

impl UrandomGenerator {
    pub fn new() -> Self {
        Self
    }

    fn read_from_urandom(byte_count: usize) -> std::io::Result<Vec<u8>> {
        let mut buf = vec![0u8; byte_count];
        let mut file = File::open(URANDOM_PATH)?;
        file.read_exact(&mut buf)?;
        Ok(buf)
    }
}

impl Generator for UrandomGenerator {
    fn generate(&self, byte_count: usize) -> Vec<u8> {
        let mut bytes = Vec::new();

        if Self::is_supported() {
            if let Ok(buf) = Self::read_from_urandom(byte_count) {
                bytes = buf;
            }
        }

        zero_pad(bytes, byte_count)
    }

    fn is_supported() -> bool {
        cfg!(unix) && Path::new(URANDOM_PATH).exists()
    }

    fn priority() -> Priority {
        Priority::Medium
    }
}
