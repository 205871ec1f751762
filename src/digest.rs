//! Credential digest function
//!
//! Maps a plaintext credential to the string digest stored on disk.
//!
//! This is explicitly weak and reversible-by-brute-force; callers must not
//! treat it as a security boundary. It exists so plaintext credentials never
//! reach the store, nothing more.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Computes the stored digest of a credential.
///
/// Deterministic and total: the same input always yields the same output,
/// including the empty string. FNV-1a over the credential bytes, rendered
/// in decimal.
pub fn digest(credential: &str) -> String {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in credential.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest("Sup3r$ecret"), digest("Sup3r$ecret"));
    }

    #[test]
    fn test_digest_empty_string_is_offset_basis() {
        assert_eq!(digest(""), "14695981039346656037");
    }

    #[test]
    fn test_digest_distinguishes_inputs() {
        assert_ne!(digest("password1"), digest("password2"));
        assert_ne!(digest("a"), digest(""));
    }
}
