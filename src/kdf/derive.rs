//! Seed → PGP key scalar pipeline (§4.F).
//!
//! `root = Argon2id(seed, salt = "mnemonikey")`, then
//! `HKDF-SHA256(ikm = root, salt = "", info = "mnemonikey/" + role +
//! "/" + creation_offset_be64)` expands a 32-byte scalar per role.
//! Ed25519 treats that scalar as an RFC 8032 seed directly; Curve25519
//! clamps it per RFC 7748 before use.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::mem::Protected;
use crate::types::{CreationTime, Seed};

use super::{argon2id, Error};

/// Salt for the root stretch. Fixed, not secret: it exists only to
/// domain-separate this KDF from every other user of Argon2id, not to
/// add entropy.
const ROOT_SALT: &[u8] = b"mnemonikey";

/// The two key roles a seed is ever expanded into. Never mixed: a
/// signing scalar and an encryption scalar derived from the same seed
/// and creation time are cryptographically unrelated values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The Ed25519 primary certification/signing key.
    Sign,
    /// The Curve25519 ECDH encryption subkey.
    Encrypt,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::Sign => "sign",
            Role::Encrypt => "encrypt",
        }
    }
}

/// Stretches `seed` into 32 bytes of root key material via Argon2id.
///
/// Pure function of `seed`; the same seed always yields the same
/// root, on any machine.
pub fn stretch_root(seed: &Seed) -> Result<Protected<32>, Error> {
    let out = argon2id(seed.as_bytes(), ROOT_SALT, 32)?;
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    Ok(Protected::new(buf))
}

/// Expands `root` into the 32-byte scalar for `role`, bound to
/// `creation_time` so that regenerating the same seed at a different
/// recorded creation time yields an unrelated key.
pub fn expand_role(
    root: &Protected<32>,
    creation_time: CreationTime,
    role: Role,
) -> Result<Protected<32>, Error> {
    let mut info = Vec::with_capacity(11 + role.label().len() + 1 + 8);
    info.extend_from_slice(b"mnemonikey/");
    info.extend_from_slice(role.label().as_bytes());
    info.push(b'/');
    info.extend_from_slice(&(creation_time.offset() as u64).to_be_bytes());

    let hk = Hkdf::<Sha256>::new(Some(b""), root.as_bytes());
    let mut okm = [0u8; 32];
    hk.expand(&info, &mut okm)
        .map_err(|e| Error::Hkdf(e.to_string()))?;
    Ok(Protected::new(okm))
}

/// Derives the 32-byte Ed25519 signing seed for `(seed, creation_time)`.
///
/// Per RFC 8032, this 32-byte value IS the secret key: Ed25519 hashes
/// and clamps it internally when computing signatures, so no
/// additional clamping happens here.
pub fn sign_key(seed: &Seed, creation_time: CreationTime) -> Result<Protected<32>, Error> {
    let root = stretch_root(seed)?;
    expand_role(&root, creation_time, Role::Sign)
}

/// Derives the clamped 32-byte Curve25519 scalar for
/// `(seed, creation_time)`.
pub fn encrypt_key(seed: &Seed, creation_time: CreationTime) -> Result<Protected<32>, Error> {
    let root = stretch_root(seed)?;
    let material = expand_role(&root, creation_time, Role::Encrypt)?;
    Ok(Protected::new(clamp_x25519(*material.as_bytes())))
}

/// Clamps a 32-byte scalar per RFC 7748 §5: clear bits 0, 1, 2 of byte
/// 0; clear bit 7 and set bit 6 of byte 31.
pub fn clamp_x25519(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let seed = Seed::new([0u8; 16]);
        let t = CreationTime::epoch();
        let a = sign_key(&seed, t).unwrap();
        let b = sign_key(&seed, t).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn sign_and_encrypt_roles_never_collide() {
        let seed = Seed::new([0xFFu8; 16]);
        let t = CreationTime::from_offset(1).unwrap();
        let sign = sign_key(&seed, t).unwrap();
        let encrypt = encrypt_key(&seed, t).unwrap();
        assert_ne!(sign.as_bytes(), encrypt.as_bytes());
    }

    #[test]
    fn different_creation_times_yield_different_keys() {
        let seed = Seed::new([0x42u8; 16]);
        let a = sign_key(&seed, CreationTime::from_offset(0).unwrap()).unwrap();
        let b = sign_key(&seed, CreationTime::from_offset(1).unwrap()).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn clamp_sets_and_clears_expected_bits() {
        let clamped = clamp_x25519([0xFFu8; 32]);
        assert_eq!(clamped[0] & 0b0000_0111, 0);
        assert_eq!(clamped[31] & 0b1000_0000, 0);
        assert_eq!(clamped[31] & 0b0100_0000, 0b0100_0000);
    }
}
