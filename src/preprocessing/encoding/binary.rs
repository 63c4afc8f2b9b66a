//! Fixed-width binary representation of integer codes.
//!
//! Codes are written most-significant-bit first and left-padded with zeros,
//! so a vocabulary of `n` entries always produces strings of the same length.

use crate::preprocessing::error::{PreprocessingError, Result};

/// Number of binary digits needed to write every code of a vocabulary of `n` entries.
///
/// This is `ceil(log2(n))`, floored at 1 so that a vocabulary holding only the
/// missing sentinel still gets one digit.
pub fn binary_width(n: usize) -> usize {
    if n <= 2 {
        return 1;
    }
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

/// Format `code` as a binary string padded with leading zeros to `width` characters.
pub fn to_binary_string(code: usize, width: usize) -> String {
    format!("{:0width$b}", code, width = width)
}

/// Split `code` into `width` digits (0 or 1), most significant first.
pub fn bits(code: usize, width: usize) -> Vec<usize> {
    (0..width)
        .rev()
        .map(|shift| {
            if shift >= usize::BITS as usize {
                0
            } else {
                (code >> shift) & 1
            }
        })
        .collect()
}

/// Parse a binary string back into its integer code.
pub fn parse_binary(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(PreprocessingError::InvalidCode(
            "empty binary string".to_string(),
        ));
    }
    if !s.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(PreprocessingError::InvalidCode(format!(
            "'{}' is not a binary string",
            s
        )));
    }
    usize::from_str_radix(s, 2)
        .map_err(|e| PreprocessingError::InvalidCode(format!("'{}': {}", s, e)))
}
