//! Stub backend for targets without a known secure random source.

use super::EntropyError;

pub(crate) fn sys_random(_buf: &mut [u8]) -> Result<(), EntropyError> {
    Err(EntropyError)
}

pub(crate) fn is_available() -> bool {
    false
}
