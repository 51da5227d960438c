//! The primary Ed25519 signing key and Curve25519 encryption subkey,
//! and the public/secret packet bodies built from them.
//!
//! Builds the v4 key packet layout directly, keeping secret scalars in
//! `Protected`-style buffers and out of ordinary `Vec<u8>` until the
//! moment they are serialized.

use ed25519_dalek::SigningKey;
use rand_core::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};

use crate::kdf::derive;
use crate::types::{CreationTime, Seed};

use super::mpi;

/// Algorithm ID for EdDSA (primary signing key).
const ALGO_EDDSA: u8 = 22;
/// Algorithm ID for ECDH (encryption subkey).
const ALGO_ECDH: u8 = 18;

/// Object identifier for the Ed25519 curve, as the OpenPGP curve OID
/// field (length-prefixed, no DER tag).
const OID_ED25519: &[u8] = &[0x2B, 0x06, 0x01, 0x04, 0x01, 0xDA, 0x47, 0x0F, 0x01];
/// Object identifier for Curve25519 (X25519).
const OID_CV25519: &[u8] = &[0x2B, 0x06, 0x01, 0x04, 0x01, 0x97, 0x55, 0x01, 0x05, 0x01];

/// ECDH KDF parameters: reserved, hash algorithm (SHA-256), symmetric
/// algorithm (AES-128) — the conventional parameters every
/// implementation uses for a Curve25519 encryption subkey.
const ECDH_KDF_PARAMS: [u8; 4] = [0x03, 0x01, 0x08, 0x07];

/// The two Ed25519/Curve25519 key pairs derived from a seed, and the
/// creation time they are bound to.
pub struct PgpKeyMaterial {
    signing: SigningKey,
    encryption: StaticSecret,
    creation_time: CreationTime,
}

impl PgpKeyMaterial {
    /// Derives both key pairs from `seed` and `creation_time`.
    pub fn derive(seed: &Seed, creation_time: CreationTime) -> Result<Self, crate::kdf::Error> {
        let signing = SigningKey::from_bytes(derive::sign_key(seed, creation_time)?.as_bytes());
        let encryption = StaticSecret::from(*derive::encrypt_key(seed, creation_time)?.as_bytes());
        Ok(PgpKeyMaterial { signing, encryption, creation_time })
    }

    /// The Ed25519 signing key, for use by the signature builder.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing
    }

    /// The creation time both keys are bound to.
    pub fn creation_time(&self) -> CreationTime {
        self.creation_time
    }

    /// Builds the primary key's public-key packet body (v4, EdDSA).
    pub fn primary_public_body(&self) -> Vec<u8> {
        public_body(
            self.creation_time,
            ALGO_EDDSA,
            OID_ED25519,
            self.signing.verifying_key().to_bytes(),
            &[],
        )
    }

    /// Builds the primary key's full secret-key packet body (public
    /// part plus secret scalar, optionally S2K-protected).
    pub fn primary_secret_body<R: RngCore + CryptoRng>(
        &self,
        password: Option<(&[u8], &mut R)>,
    ) -> Vec<u8> {
        let public = self.primary_public_body();
        let secret_mpi = mpi::encode(&self.signing.to_bytes());
        secret_body(public, secret_mpi, password)
    }

    /// Builds the subkey's public-key packet body (v4, ECDH).
    pub fn subkey_public_body(&self) -> Vec<u8> {
        let point = X25519PublicKey::from(&self.encryption);
        public_body(
            self.creation_time,
            ALGO_ECDH,
            OID_CV25519,
            *point.as_bytes(),
            &ECDH_KDF_PARAMS,
        )
    }

    /// Builds the subkey's full secret-key packet body.
    ///
    /// The secret scalar is stored byte-reversed relative to its
    /// native little-endian `StaticSecret` representation: every
    /// deployed OpenPGP implementation treats a Curve25519 secret MPI
    /// as a big-endian integer of the *reversed* scalar bytes, a
    /// long-standing quirk this crate must reproduce to interoperate.
    pub fn subkey_secret_body<R: RngCore + CryptoRng>(
        &self,
        password: Option<(&[u8], &mut R)>,
    ) -> Vec<u8> {
        let public = self.subkey_public_body();
        let mut reversed = self.encryption.to_bytes();
        reversed.reverse();
        let secret_mpi = mpi::encode(&reversed);
        secret_body(public, secret_mpi, password)
    }
}

/// Builds a v4 public-key packet body:
/// `version(4) ‖ creation_time(4) ‖ algo(1) ‖ oid ‖ point [‖ kdf_params]`.
fn public_body(
    creation_time: CreationTime,
    algo: u8,
    oid: &[u8],
    point: [u8; 32],
    kdf_params: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(6 + 1 + oid.len() + 35 + kdf_params.len());
    out.push(4);
    out.extend_from_slice(&creation_time.to_unix_seconds().to_be_bytes());
    out.push(algo);
    out.push(oid.len() as u8);
    out.extend_from_slice(oid);
    out.extend_from_slice(&mpi::encode_native_point(&point));
    out.extend_from_slice(kdf_params);
    out
}

/// Appends the secret-material section to `public_body`, either in
/// the clear (usage `0x00`, two-byte checksum) or S2K-protected (usage
/// `0xFE`) when `password` is supplied.
fn secret_body<R: RngCore + CryptoRng>(
    mut public_body: Vec<u8>,
    secret_mpi: Vec<u8>,
    password: Option<(&[u8], &mut R)>,
) -> Vec<u8> {
    match password {
        None => {
            public_body.push(super::s2k::USAGE_UNPROTECTED);
            public_body.extend_from_slice(&secret_mpi);
            let checksum: u16 = secret_mpi.iter().fold(0u16, |acc, &b| acc.wrapping_add(b as u16));
            public_body.extend_from_slice(&checksum.to_be_bytes());
        }
        Some((passphrase, rng)) => {
            let encrypted = super::s2k::protect(&secret_mpi, passphrase, rng);
            public_body.push(super::s2k::USAGE_SHA1_CHECKSUM);
            public_body.push(encrypted.sym_algo);
            public_body.extend_from_slice(&encrypted.s2k_specifier);
            public_body.extend_from_slice(&encrypted.iv);
            public_body.extend_from_slice(&encrypted.ciphertext);
        }
    }
    public_body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let seed = Seed::new([0x33u8; 16]);
        let t = CreationTime::from_offset(10).unwrap();
        let a = PgpKeyMaterial::derive(&seed, t).unwrap();
        let b = PgpKeyMaterial::derive(&seed, t).unwrap();
        assert_eq!(a.primary_public_body(), b.primary_public_body());
        assert_eq!(a.subkey_public_body(), b.subkey_public_body());
    }

    #[test]
    fn public_body_starts_with_version_four() {
        let seed = Seed::new([0x01u8; 16]);
        let material = PgpKeyMaterial::derive(&seed, CreationTime::epoch()).unwrap();
        assert_eq!(material.primary_public_body()[0], 4);
        assert_eq!(material.primary_public_body()[5], ALGO_EDDSA);
    }

    #[test]
    fn unprotected_secret_body_ends_in_two_byte_checksum() {
        let seed = Seed::new([0x02u8; 16]);
        let material = PgpKeyMaterial::derive(&seed, CreationTime::epoch()).unwrap();
        let body = material.primary_secret_body::<rand::rngs::StdRng>(None);
        let public_len = material.primary_public_body().len();
        assert_eq!(body[public_len], super::super::s2k::USAGE_UNPROTECTED);
    }

    /// A fixed, recognizable seed value, pinning derivation shape and
    /// determinism rather than an external fingerprint (no reference
    /// vector is available to compare against).
    #[test]
    fn known_seed_vector_derives_without_error() {
        use hex_literal::hex;
        let seed = Seed::new(hex!("0123456789abcdef0123456789abcdef"));
        let t = CreationTime::from_offset(365).unwrap();
        let material = PgpKeyMaterial::derive(&seed, t).unwrap();
        assert_eq!(material.primary_public_body()[0], 4);
        assert_eq!(material.subkey_public_body()[5], ALGO_ECDH);
    }
}
