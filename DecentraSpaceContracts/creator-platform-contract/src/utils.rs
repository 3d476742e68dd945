use crate::errors::PlatformError;
use soroban_sdk::{Env, String};

/// Renders a sequential storage id such as `content_7` or `room_12`.
///
/// Counters are `u32`, so the digit tail never exceeds 10 bytes and the
/// buffer is all ASCII by construction.
pub fn sequential_id(env: &Env, prefix: &str, n: u32) -> String {
    let prefix = prefix.as_bytes();
    let mut buf = [0u8; 24];
    buf[..prefix.len()].copy_from_slice(prefix);

    let mut len = prefix.len();
    if n == 0 {
        buf[len] = b'0';
        len += 1;
    } else {
        // Convert the number to its string representation
        let mut digits = [0u8; 10];
        let mut num = n;
        let mut digit_count = 0;

        while num > 0 {
            digits[digit_count] = (num % 10) as u8 + b'0';
            num /= 10;
            digit_count += 1;
        }

        // Reverse the digits to get the correct order
        for i in (0..digit_count).rev() {
            buf[len] = digits[i];
            len += 1;
        }
    }

    let id = unsafe { core::str::from_utf8_unchecked(&buf[..len]) };
    String::from_str(env, id)
}

/// Rejects empty or oversized user-supplied text.
pub fn validate_text(value: &String, max_len: u32) -> Result<(), PlatformError> {
    if value.is_empty() || value.len() > max_len {
        return Err(PlatformError::InvalidInput);
    }
    Ok(())
}
