use libc::arc4random_buf;

use super::EntropyError;

pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    // arc4random_buf cannot fail; it reseeds itself from the kernel.
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}

pub(crate) fn is_available() -> bool {
    true
}
