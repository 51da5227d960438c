//! Optional S2K encryption of secret-key material (RFC 4880 §3.7,
//! §5.5.3).
//!
//! Orthogonal to the mnemonic phrase's own password protection
//! (`crate::kdf::password`): this S2K always draws a fresh random
//! salt and IV, so two PGP blocks generated from the same seed and
//! password are never byte-identical, and that randomness never
//! reaches the fingerprint (it covers only the secret half of the
//! packet).

use aes::Aes256;
use cfb_mode::Encryptor;
use cipher::{AsyncStreamCipher, KeyIvInit};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

/// S2K type: iterated and salted (RFC 4880 §3.7.1.3).
const S2K_TYPE_ITERATED_SALTED: u8 = 3;
/// Hash algorithm ID for SHA-256, used by this crate's S2K.
const S2K_HASH_SHA256: u8 = 8;
/// Symmetric algorithm ID for AES-256.
pub const SYM_ALGO_AES256: u8 = 9;
/// Secret-material usage octet meaning "S2K-protected, SHA-1 checksum".
pub const USAGE_SHA1_CHECKSUM: u8 = 0xFE;
/// Secret-material usage octet meaning "cleartext, 2-byte checksum".
pub const USAGE_UNPROTECTED: u8 = 0x00;

/// The coded iteration-count byte fed to the S2K, and the literal byte
/// count it decodes to: `(16 + (c & 15)) << ((c >> 4) + 6)`. `0xFF`,
/// the maximum coded byte, decodes to `(16 + 15) << (15 + 6) ==
/// 31 << 21 == 65_011_712` octets — the strongest iteration count RFC
/// 4880's coded-count byte can express.
const S2K_COUNT_CODED: u8 = 0xFF;

/// An S2K-encrypted secret-material field, ready to be appended to a
/// Secret-Key or Secret-Subkey packet body after its public part.
pub struct EncryptedSecret {
    /// Always [`SYM_ALGO_AES256`].
    pub sym_algo: u8,
    /// `type ‖ hash_algo ‖ salt ‖ count` S2K specifier.
    pub s2k_specifier: [u8; 11],
    /// The CFB initialization vector (one AES block).
    pub iv: [u8; 16],
    /// `secret_mpi ‖ SHA-1(secret_mpi)`, encrypted under the
    /// S2K-derived key.
    pub ciphertext: Vec<u8>,
}

/// Encrypts `secret_mpi` under a key derived from `passphrase`.
pub fn protect<R: RngCore + CryptoRng>(
    secret_mpi: &[u8],
    passphrase: &[u8],
    rng: &mut R,
) -> EncryptedSecret {
    let mut salt = [0u8; 8];
    rng.fill_bytes(&mut salt);
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);

    let key = derive_key(passphrase, &salt, S2K_COUNT_CODED);

    let mut plaintext = secret_mpi.to_vec();
    plaintext.extend_from_slice(&sha1_of(secret_mpi));

    Encryptor::<Aes256>::new((&key).into(), (&iv).into()).encrypt(&mut plaintext);

    let mut s2k_specifier = [0u8; 11];
    s2k_specifier[0] = S2K_TYPE_ITERATED_SALTED;
    s2k_specifier[1] = S2K_HASH_SHA256;
    s2k_specifier[2..10].copy_from_slice(&salt);
    s2k_specifier[10] = S2K_COUNT_CODED;

    EncryptedSecret { sym_algo: SYM_ALGO_AES256, s2k_specifier, iv, ciphertext: plaintext }
}

/// Derives a 32-byte AES-256 key from `passphrase` via the iterated
/// and salted S2K: SHA-256 over `salt ‖ passphrase`, repeated until
/// `decode_count(count)` bytes have been hashed.
fn derive_key(passphrase: &[u8], salt: &[u8; 8], count: u8) -> [u8; 32] {
    let mut seed = Vec::with_capacity(8 + passphrase.len());
    seed.extend_from_slice(salt);
    seed.extend_from_slice(passphrase);

    let target = decode_count(count);
    let mut hasher = Sha256::new();
    let mut written = 0usize;
    while written + seed.len() <= target {
        hasher.update(&seed);
        written += seed.len();
    }
    if written < target {
        hasher.update(&seed[..target - written]);
    }

    let digest = hasher.finalize();
    let mut key = [0u8; 32];
    key.copy_from_slice(&digest);
    key
}

/// Decodes an RFC 4880 §3.7.1.3 coded iteration count byte.
fn decode_count(c: u8) -> usize {
    (16usize + (c as usize & 0x0F)) << ((c as usize >> 4) + 6)
}

/// SHA-1 of `data`, for the usage-`0xFE` secret-material checksum.
///
/// RFC 4880 §12.2 mandates SHA-1 for v4 fingerprints; reusing it here
/// for the secret-material integrity check (rather than, say, SHA-256)
/// matches every deployed OpenPGP implementation's usage-`0xFE`
/// encoding, which this crate must interoperate with.
fn sha1_of(data: &[u8]) -> [u8; 20] {
    use digest::Digest as _;
    let mut hasher = sha1collisiondetection::Sha1CD::default();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn decode_count_matches_rfc_example() {
        assert_eq!(decode_count(0xFF), 31 << 21);
    }

    #[test]
    fn protect_round_trips_through_manual_decrypt() {
        use cfb_mode::Decryptor;

        let mut rng = StdRng::seed_from_u64(1);
        let secret = b"\x00\x20thirty-two bytes of secret key";
        let encrypted = protect(secret, b"hunter2", &mut rng);

        let salt: [u8; 8] = encrypted.s2k_specifier[2..10].try_into().unwrap();
        let key = derive_key(b"hunter2", &salt, encrypted.s2k_specifier[10]);

        let mut buf = encrypted.ciphertext.clone();
        Decryptor::<Aes256>::new((&key).into(), (&encrypted.iv).into()).decrypt(&mut buf);

        assert_eq!(&buf[..secret.len()], &secret[..]);
        assert_eq!(&buf[secret.len()..], &sha1_of(secret));
    }

    #[test]
    fn protect_draws_fresh_salt_each_call() {
        let mut rng = StdRng::seed_from_u64(2);
        let a = protect(b"secret", b"hunter2", &mut rng);
        let b = protect(b"secret", b"hunter2", &mut rng);
        assert_ne!(a.s2k_specifier, b.s2k_specifier);
    }
}
