//! Operating system abstraction layer (Linux)
//!
//! On Linux the secure source is the `getrandom` system call, which reads
//! directly from the kernel entropy pool. `getrandom` was added in kernel
//! 3.17; on older kernels the call fails with `ENOSYS`, which is how
//! `is_available` detects an unsupported host.

use libc::{c_void, getrandom};

use super::EntropyError;

/// Fills a buffer with cryptographically secure random bytes from the kernel.
///
/// Calls `getrandom` repeatedly until the buffer is full. Partial reads are
/// handled transparently; they can occur depending on kernel behavior or
/// signal interruptions. Any error return aborts the fill.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            return Err(EntropyError);
        }

        filled += ret as usize;
    }

    Ok(())
}

/// Probes for `getrandom` support with a zero-length request.
///
/// A zero-length call returns immediately without touching the entropy pool,
/// so the probe is side-effect-free. `ENOSYS` means the kernel predates the
/// system call.
pub(crate) fn is_available() -> bool {
    let ret = unsafe { getrandom(std::ptr::null_mut(), 0, 0) };
    ret >= 0
}
