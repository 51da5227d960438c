//! Key fingerprints and key IDs.
//!
//! A `Fingerprint`/`KeyId` pair, deliberately without a polymorphic
//! wrapper over the two: this crate only ever needs a v4 fingerprint
//! and the key ID derived from it, never a bare key ID recovered from
//! the wire with no fingerprint behind it.

use digest::Digest;
use sha1collisiondetection::Sha1CD;

/// A v4 OpenPGP fingerprint: the SHA-1 digest of `0x99 ‖ len_be16 ‖
/// public_key_packet_body` (RFC 4880 §12.2).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 20]);

impl Fingerprint {
    /// Computes the fingerprint of a public-key packet body.
    ///
    /// `body` is the packet body only — version, creation time,
    /// algorithm, and public key material — never the packet header.
    pub fn of_public_key_body(body: &[u8]) -> Self {
        let mut hasher = Sha1CD::default();
        hasher.update([0x99u8]);
        hasher.update((body.len() as u16).to_be_bytes());
        hasher.update(body);
        let digest = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest);
        Fingerprint(bytes)
    }

    /// The raw 20 fingerprint bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// The key ID: the low 8 bytes of the fingerprint.
    pub fn key_id(&self) -> KeyId {
        let mut id = [0u8; 8];
        id.copy_from_slice(&self.0[12..]);
        KeyId(id)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Fingerprint({})", self)
    }
}

/// The low 8 bytes of a [`Fingerprint`], used in the unhashed "issuer"
/// subpacket of a signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId([u8; 8]);

impl KeyId {
    /// The raw 8 key ID bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "KeyId({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let body = b"fake public key packet body";
        let a = Fingerprint::of_public_key_body(body);
        let b = Fingerprint::of_public_key_body(body);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn different_bodies_yield_different_fingerprints() {
        let a = Fingerprint::of_public_key_body(b"one");
        let b = Fingerprint::of_public_key_body(b"two");
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn key_id_is_fingerprint_suffix() {
        let fp = Fingerprint::of_public_key_body(b"fake public key packet body");
        assert_eq!(fp.key_id().as_bytes(), &fp.as_bytes()[12..]);
    }

    #[test]
    fn fingerprint_displays_as_uppercase_hex() {
        let fp = Fingerprint([0xABu8; 20]);
        assert_eq!(fp.to_string(), "AB".repeat(20));
    }
}
