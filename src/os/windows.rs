use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

use super::EntropyError;

pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    // BCryptGenRandom takes a u32 length; fill oversized requests in chunks.
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(EntropyError);
        }
    }

    Ok(())
}

pub(crate) fn is_available() -> bool {
    true
}
