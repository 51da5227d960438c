//! V4 signature packets (RFC 4880 §5.2): the primary key's positive
//! certification over its user ID, and the subkey binding signature.
//!
//! EdDSA is deterministic by construction (RFC 8032): `ed25519-dalek`'s
//! `sign` takes no RNG, so two calls with the same key and message
//! always produce the same signature. The signed content is exactly
//! `hashed_subpackets_body ‖ trailer` per RFC 4880 §5.2.4, run through
//! SHA-256 before being handed to Ed25519 as its message.

use ed25519_dalek::Signer;
use sha2::{Digest, Sha256};

use crate::types::{CreationTime, Ttl};

use super::{fingerprint::Fingerprint, key::PgpKeyMaterial, mpi};

/// Hash algorithm ID for SHA-256.
const HASH_SHA256: u8 = 8;
/// Public key algorithm ID for EdDSA.
const ALGO_EDDSA: u8 = 22;

/// Signature type: positive certification of a User ID.
const SIG_TYPE_POSITIVE_CERTIFICATION: u8 = 0x13;
/// Signature type: subkey binding.
const SIG_TYPE_SUBKEY_BINDING: u8 = 0x18;

/// Key flags: certify plus sign, for the primary key's self-certification.
const KEY_FLAGS_PRIMARY: u8 = 0x01 | 0x02;
/// Key flags: encrypt-communications plus encrypt-storage, for the subkey.
const KEY_FLAGS_SUBKEY: u8 = 0x04 | 0x08;
/// Features subpacket value: modification detection supported.
const FEATURES: u8 = 0x01;

/// Builds the primary key's positive-certification signature packet
/// body binding `user_id` to `material`'s primary key.
pub fn certify_user_id(material: &PgpKeyMaterial, user_id: &str, ttl: Option<Ttl>) -> Vec<u8> {
    let hashed = hashed_subpackets(material.creation_time(), KEY_FLAGS_PRIMARY, ttl);

    let mut signed_data = Vec::new();
    signed_data.extend_from_slice(&key_hash_prefix(&material.primary_public_body()));
    signed_data.push(0xB4);
    signed_data.extend_from_slice(&(user_id.len() as u32).to_be_bytes());
    signed_data.extend_from_slice(user_id.as_bytes());

    build(material, SIG_TYPE_POSITIVE_CERTIFICATION, hashed, signed_data)
}

/// Builds the subkey-binding signature packet body for `material`'s
/// encryption subkey.
pub fn bind_subkey(material: &PgpKeyMaterial) -> Vec<u8> {
    let hashed = hashed_subpackets(material.creation_time(), KEY_FLAGS_SUBKEY, None);

    let mut signed_data = Vec::new();
    signed_data.extend_from_slice(&key_hash_prefix(&material.primary_public_body()));
    signed_data.extend_from_slice(&key_hash_prefix(&material.subkey_public_body()));

    build(material, SIG_TYPE_SUBKEY_BINDING, hashed, signed_data)
}

/// `0x99 ‖ len_be16 ‖ body`, the form a public-key packet takes inside
/// both a fingerprint and a signature's hashed content.
fn key_hash_prefix(public_body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 + public_body.len());
    out.push(0x99);
    out.extend_from_slice(&(public_body.len() as u16).to_be_bytes());
    out.extend_from_slice(public_body);
    out
}

/// Assembles, hashes, and signs a v4 signature packet body.
fn build(
    material: &PgpKeyMaterial,
    sig_type: u8,
    hashed_subpackets: Vec<u8>,
    mut signed_data: Vec<u8>,
) -> Vec<u8> {
    let mut front = vec![4u8, sig_type, ALGO_EDDSA, HASH_SHA256];
    front.extend_from_slice(&(hashed_subpackets.len() as u16).to_be_bytes());
    front.extend_from_slice(&hashed_subpackets);

    signed_data.extend_from_slice(&front);
    signed_data.extend_from_slice(&[4, 0xFF]);
    signed_data.extend_from_slice(&(front.len() as u32).to_be_bytes());

    let digest = Sha256::digest(&signed_data);
    let signature = material.signing_key().sign(&digest);
    let raw = signature.to_bytes();
    let (r, s) = raw.split_at(32);

    let issuer = Fingerprint::of_public_key_body(&material.primary_public_body()).key_id();
    let unhashed = subpacket(16, issuer.as_bytes());

    let mut out = front;
    out.extend_from_slice(&(unhashed.len() as u16).to_be_bytes());
    out.extend_from_slice(&unhashed);
    out.extend_from_slice(&digest[..2]);
    out.extend_from_slice(&mpi::encode(r));
    out.extend_from_slice(&mpi::encode(s));
    out
}

/// The hashed subpacket area shared by both signature kinds: creation
/// time, key flags, and — on the primary key's self-certification
/// only — the preferred-algorithm and features subpackets a client
/// uses to decide how to treat this identity.
fn hashed_subpackets(creation_time: CreationTime, key_flags: u8, ttl: Option<Ttl>) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&subpacket(2, &creation_time.to_unix_seconds().to_be_bytes()));
    out.extend_from_slice(&subpacket(27, &[key_flags]));

    if key_flags == KEY_FLAGS_PRIMARY {
        out.extend_from_slice(&subpacket(21, &[HASH_SHA256]));
        out.extend_from_slice(&subpacket(11, &[super::s2k::SYM_ALGO_AES256]));
        out.extend_from_slice(&subpacket(22, &[0]));
        out.extend_from_slice(&subpacket(30, &[FEATURES]));
    }

    if let Some(ttl) = ttl {
        out.extend_from_slice(&subpacket(9, &ttl.as_secs().to_be_bytes()));
    }

    out
}

/// Builds one signature subpacket: variable-length header, type
/// octet, then `data`.
fn subpacket(kind: u8, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + data.len());
    push_length(&mut out, data.len() + 1);
    out.push(kind);
    out.extend_from_slice(data);
    out
}

/// RFC 4880 §5.2.3.1 variable-length subpacket length encoding.
fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 192 {
        out.push(len as u8);
    } else if len < 16320 {
        let len = len - 192;
        out.push((len >> 8) as u8 + 192);
        out.push((len & 0xFF) as u8);
    } else {
        out.push(0xFF);
        out.extend_from_slice(&(len as u32).to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seed;

    #[test]
    fn certification_is_deterministic() {
        let material =
            PgpKeyMaterial::derive(&Seed::new([0x09u8; 16]), CreationTime::epoch()).unwrap();
        let a = certify_user_id(&material, "Alice <alice@example.com>", None);
        let b = certify_user_id(&material, "Alice <alice@example.com>", None);
        assert_eq!(a, b);
    }

    #[test]
    fn certification_starts_with_v4_and_positive_cert_type() {
        let material =
            PgpKeyMaterial::derive(&Seed::new([0x0Au8; 16]), CreationTime::epoch()).unwrap();
        let body = certify_user_id(&material, "Bob <bob@example.com>", None);
        assert_eq!(body[0], 4);
        assert_eq!(body[1], SIG_TYPE_POSITIVE_CERTIFICATION);
    }

    #[test]
    fn subkey_binding_starts_with_binding_type() {
        let material =
            PgpKeyMaterial::derive(&Seed::new([0x0Bu8; 16]), CreationTime::epoch()).unwrap();
        let body = bind_subkey(&material);
        assert_eq!(body[1], SIG_TYPE_SUBKEY_BINDING);
    }

    #[test]
    fn different_user_ids_yield_different_signatures() {
        let material =
            PgpKeyMaterial::derive(&Seed::new([0x0Cu8; 16]), CreationTime::epoch()).unwrap();
        let a = certify_user_id(&material, "Alice <alice@example.com>", None);
        let b = certify_user_id(&material, "Alice Two <alice2@example.com>", None);
        assert_ne!(a, b);
    }
}
