//! Legacy sheet protection password hash
//!
//! The 16-bit hash used by the `password` attribute of
//! `sheetProtection`. It is not a cryptographic hash; it only deters
//! casual edits, which is all the legacy attribute supports.

/// Hash a password for the `sheetProtection` element
pub fn hash_password(password: &str) -> u16 {
    let mut hash: u16 = 0;
    for byte in password.as_bytes().iter().rev() {
        hash = ((hash >> 14) & 0x01) | ((hash << 1) & 0x7fff);
        hash ^= *byte as u16;
    }
    hash = ((hash >> 14) & 0x01) | ((hash << 1) & 0x7fff);
    hash ^= password.len() as u16;
    hash ^= 0xce4b;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hash() {
        // reference value produced by Excel for "password"
        assert_eq!(hash_password("password"), 0x83af);
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(hash_password(""), 0xce4b);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_password("abc"), hash_password("abc"));
        assert_ne!(hash_password("abc"), hash_password("abd"));
    }
}
