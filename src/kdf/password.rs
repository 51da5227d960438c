//! Phrase password stretching (§4.D).
//!
//! Given a phrase password and a salt derived from the phrase's
//! public header bits, Argon2id produces 17 bytes: a 16-byte mask
//! that XORs against the entropy field, and a 4-bit verification
//! nibble folded into the encrypted phrase's checksum domain so a
//! wrong password is rejected before any PGP operation runs.

use crate::mem::Protected;

use super::{argon2id, Error};

/// Output of [`stretch`]: the entropy mask and the verification
/// nibble, kept separate so callers cannot accidentally leak the
/// nibble into a context that expects the mask alone.
pub struct PasswordKey {
    mask: Protected<16>,
    verify_nibble: u8,
}

impl PasswordKey {
    /// The 16-byte mask XORed against the entropy‖reserved field.
    pub fn mask(&self) -> &[u8; 16] {
        self.mask.as_bytes()
    }

    /// The low 4 bits of the 17th Argon2id output byte.
    pub fn verify_nibble(&self) -> u8 {
        self.verify_nibble
    }
}

/// Stretches `password` with `salt` into a [`PasswordKey`].
///
/// Uses the same Argon2id parameters (64 MiB, 8 iterations, 4 lanes)
/// as the seed-stretch step in [`crate::kdf::derive`], but the two
/// domains are never interchangeable: different secrets, different
/// salts, different output lengths.
pub fn stretch(password: &[u8], salt: &[u8; 16]) -> Result<PasswordKey, Error> {
    let out = argon2id(password, salt, 17)?;
    let mut mask = [0u8; 16];
    mask.copy_from_slice(&out[..16]);
    let verify_nibble = out[16] & 0x0F;
    Ok(PasswordKey { mask: Protected::new(mask), verify_nibble })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_is_deterministic() {
        let salt = [0x11u8; 16];
        let a = stretch(b"correct horse battery staple", &salt).unwrap();
        let b = stretch(b"correct horse battery staple", &salt).unwrap();
        assert_eq!(a.mask(), b.mask());
        assert_eq!(a.verify_nibble(), b.verify_nibble());
    }

    #[test]
    fn different_passwords_yield_different_keys() {
        let salt = [0x22u8; 16];
        let a = stretch(b"correct horse battery staple", &salt).unwrap();
        let b = stretch(b"Correct horse battery staple", &salt).unwrap();
        assert_ne!(a.mask(), b.mask());
    }

    #[test]
    fn different_salts_yield_different_keys() {
        let a = stretch(b"hunter2", &[0x00u8; 16]).unwrap();
        let b = stretch(b"hunter2", &[0x01u8; 16]).unwrap();
        assert_ne!(a.mask(), b.mask());
    }
}
