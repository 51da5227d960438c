//! Recovery phrase codec (§4.E): encodes and decodes a `(Seed,
//! CreationTime)` pair, optionally password-protected, as a sequence
//! of words drawn from [`crate::wordlist`].
//!
//! Two independent wire formats share one 154-bit payload shape
//! (`version ‖ creation_offset ‖ entropy-or-ciphertext ‖ reserved`)
//! and one 30-bit checksum domain: a plaintext phrase (version 0) and
//! a password-protected phrase (version 1) whose entropy field is
//! XORed with an Argon2id-derived mask before the checksum is taken.
//! Dispatch between them is a match on the parsed version field, never
//! a trait object, per the design note favoring tagged unions here.

use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;

use crate::bits::BitBuffer;
use crate::checksum;
use crate::kdf::password;
use crate::mem::secure_cmp;
use crate::types::CreationTime;
use crate::wordlist;
use crate::Seed;

const VERSION_PLAIN: u64 = 0;
const VERSION_ENCRYPTED: u64 = 1;

const VERSION_BITS: u32 = 3;
const CREATION_OFFSET_BITS: u32 = 15;
const ENTROPY_BITS: u32 = 128;
const RESERVED_BITS: u32 = 8;
const CHECKSUM_BITS: u32 = 30;

/// Bits the checksum is computed over: version, creation offset,
/// entropy-or-ciphertext, reserved.
const PAYLOAD_BITS: u32 = VERSION_BITS + CREATION_OFFSET_BITS + ENTROPY_BITS + RESERVED_BITS;

/// Total wire bits before word-splitting: payload plus checksum.
const WIRE_BITS: u32 = PAYLOAD_BITS + CHECKSUM_BITS;

/// Number of words a phrase is split into.
///
/// A 4096-word table gives 12 bits/word (`log2(4096) == 12`), and the
/// wire layout is 154 payload bits plus a 30-bit checksum, 184 bits
/// total. `184 / 12` is not a whole number, so the word count floats
/// to whatever grouping of 12-bit words covers 184 bits: 16 words,
/// with 8 trailing zero-pad bits appended the way BIP-39 zero-pads a
/// checksummed payload out to a whole number of words.
pub const WORD_COUNT: usize =
    (WIRE_BITS as usize + wordlist::WORD_BITS as usize - 1) / wordlist::WORD_BITS as usize;

/// Zero bits appended after the checksum to fill the last word.
const PAD_BITS: u32 = WORD_COUNT as u32 * wordlist::WORD_BITS - WIRE_BITS;

/// Domain separator for the encrypted phrase's deterministic S2K salt.
const S2K_DOMAIN: &[u8] = b"mnemonikey-s2k";

/// Errors raised decoding a recovery phrase.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// A word is neither an exact table entry nor a unique prefix.
    #[error("unrecognized word: {0}")]
    UnknownWord(#[from] wordlist::Error),
    /// The phrase did not split into exactly [`WORD_COUNT`] words.
    #[error("expected {WORD_COUNT} words, found {0}")]
    WordCount(usize),
    /// The trailing checksum disagreed with the recomputed value.
    /// Indistinguishable from a wrong password on an encrypted phrase;
    /// that indistinguishability is intentional.
    #[error("checksum mismatch")]
    ChecksumMismatch,
    /// The version field named a value this codec does not implement.
    #[error("unsupported phrase version {0}")]
    UnknownVersion(u64),
    /// The reserved field was nonzero.
    #[error("reserved field is nonzero")]
    ReservedNonZero,
    /// The creation offset exceeds the 15-bit field's range.
    #[error("creation offset is out of range")]
    CreationOutOfRange,
    /// A `BitBuffer` push/read failed; indicates a layout bug here,
    /// since every width above is a fixed compile-time constant.
    #[error("bit layout error: {0}")]
    BitLayout(#[from] crate::bits::Error),
    /// Argon2id rejected its parameters while stretching a phrase
    /// password.
    #[error("key derivation failed: {0}")]
    Derivation(#[from] crate::kdf::Error),
}

/// The wire version parsed from a phrase's first three bits.
///
/// Exposed so a caller can decide whether a password is needed before
/// committing to a decoder, without running either decoder's full
/// logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// An unencrypted phrase (wire version 0).
    Plain,
    /// A password-protected phrase (wire version 1).
    Encrypted,
}

/// Parses just enough of `phrase` to report which decoder applies.
pub fn peek_version(phrase: &str) -> Result<Version, Error> {
    let mut bits = words_to_bits(phrase)?;
    match bits.read(VERSION_BITS)? {
        VERSION_PLAIN => Ok(Version::Plain),
        VERSION_ENCRYPTED => Ok(Version::Encrypted),
        v => Err(Error::UnknownVersion(v)),
    }
}

/// Encodes `seed` and `creation_time` as a plaintext recovery phrase.
pub fn encode_plain(seed: &Seed, creation_time: CreationTime) -> Result<String, Error> {
    let mut payload = BitBuffer::new();
    payload.push(VERSION_PLAIN, VERSION_BITS)?;
    payload.push(creation_time.offset() as u64, CREATION_OFFSET_BITS)?;
    payload.push_bytes(seed.as_bytes());
    payload.push(0, RESERVED_BITS)?;

    let checksum = checksum::checksum30(&payload);
    payload.push(checksum as u64, CHECKSUM_BITS)?;
    payload.push(0, PAD_BITS)?;

    Ok(bits_to_words(&payload))
}

/// Decodes a plaintext recovery phrase produced by [`encode_plain`].
pub fn decode_plain(phrase: &str) -> Result<(Seed, CreationTime), Error> {
    let mut bits = words_to_bits(phrase)?;

    let version = bits.read(VERSION_BITS)?;
    if version != VERSION_PLAIN {
        return Err(Error::UnknownVersion(version));
    }
    let offset = bits.read(CREATION_OFFSET_BITS)? as u16;
    let entropy = read_field::<16>(&mut bits)?;
    let reserved = bits.read(RESERVED_BITS)?;
    if reserved != 0 {
        return Err(Error::ReservedNonZero);
    }
    let checksum_field = bits.read(CHECKSUM_BITS)? as u32;

    let expected = recompute_checksum(VERSION_PLAIN, offset, &entropy)?;
    if !secure_cmp(&checksum_field.to_be_bytes(), &expected.to_be_bytes()) {
        return Err(Error::ChecksumMismatch);
    }

    let creation_time = CreationTime::from_offset(offset).map_err(|_| Error::CreationOutOfRange)?;
    Ok((Seed::new(entropy), creation_time))
}

/// Encodes `seed` and `creation_time` as a password-protected phrase.
///
/// The S2K salt is derived deterministically from `(version,
/// creation_offset)` alone (§9 design note), so re-encrypting the same
/// `(seed, time, password)` always yields the same phrase.
pub fn encode_encrypted(
    seed: &Seed,
    creation_time: CreationTime,
    password: &[u8],
) -> Result<String, Error> {
    let offset = creation_time.offset();
    let key = password::stretch(password, &s2k_salt(VERSION_ENCRYPTED, offset))?;

    let mut ciphertext = [0u8; 16];
    for i in 0..16 {
        ciphertext[i] = seed.as_bytes()[i] ^ key.mask()[i];
    }

    let mut payload = BitBuffer::new();
    payload.push(VERSION_ENCRYPTED, VERSION_BITS)?;
    payload.push(offset as u64, CREATION_OFFSET_BITS)?;
    payload.push_bytes(&ciphertext);
    payload.push(0, RESERVED_BITS)?;

    let base_checksum = checksum::checksum30(&payload);
    let checksum = base_checksum ^ verify_mask(key.verify_nibble());
    payload.push(checksum as u64, CHECKSUM_BITS)?;
    payload.push(0, PAD_BITS)?;

    Ok(bits_to_words(&payload))
}

/// Decodes a password-protected phrase produced by [`encode_encrypted`].
///
/// A wrong password and a corrupted phrase are indistinguishable:
/// both surface as [`Error::ChecksumMismatch`].
pub fn decode_encrypted(phrase: &str, password: &[u8]) -> Result<(Seed, CreationTime), Error> {
    let mut bits = words_to_bits(phrase)?;

    let version = bits.read(VERSION_BITS)?;
    if version != VERSION_ENCRYPTED {
        return Err(Error::UnknownVersion(version));
    }
    let offset = bits.read(CREATION_OFFSET_BITS)? as u16;
    let ciphertext = read_field::<16>(&mut bits)?;
    let reserved = bits.read(RESERVED_BITS)?;
    if reserved != 0 {
        return Err(Error::ReservedNonZero);
    }
    let checksum_field = bits.read(CHECKSUM_BITS)? as u32;

    let key = password::stretch(password, &s2k_salt(version, offset))?;
    let base_checksum = recompute_checksum(version, offset, &ciphertext)?;
    let expected = base_checksum ^ verify_mask(key.verify_nibble());

    if !secure_cmp(&checksum_field.to_be_bytes(), &expected.to_be_bytes()) {
        return Err(Error::ChecksumMismatch);
    }

    let mut entropy = [0u8; 16];
    for i in 0..16 {
        entropy[i] = ciphertext[i] ^ key.mask()[i];
    }

    let creation_time = CreationTime::from_offset(offset).map_err(|_| Error::CreationOutOfRange)?;
    Ok((Seed::new(entropy), creation_time))
}

/// Derives the deterministic S2K salt for an encrypted phrase header.
fn s2k_salt(version: u64, creation_offset: u16) -> [u8; 16] {
    let mut hasher = Sha256::new();
    hasher.update(S2K_DOMAIN);
    hasher.update([version as u8]);
    hasher.update(creation_offset.to_be_bytes());
    let digest = hasher.finalize();
    let mut salt = [0u8; 16];
    salt.copy_from_slice(&digest[..16]);
    salt
}

/// The 4-bit password verification nibble, positioned at the top of
/// the 30-bit checksum field.
fn verify_mask(nibble: u8) -> u32 {
    (nibble as u32 & 0x0F) << (CHECKSUM_BITS - 4)
}

/// Rebuilds the 154-bit payload for `(version, offset, field)` and
/// returns its 30-bit checksum.
fn recompute_checksum(version: u64, offset: u16, field: &[u8; 16]) -> Result<u32, Error> {
    let mut payload = BitBuffer::new();
    payload.push(version, VERSION_BITS)?;
    payload.push(offset as u64, CREATION_OFFSET_BITS)?;
    payload.push_bytes(field);
    payload.push(0, RESERVED_BITS)?;
    Ok(checksum::checksum30(&payload))
}

/// Reads `N` bytes from `bits`, most significant bit first.
fn read_field<const N: usize>(bits: &mut BitBuffer) -> Result<[u8; N], Error> {
    let mut out = [0u8; N];
    for b in out.iter_mut() {
        *b = bits.read(8)? as u8;
    }
    Ok(out)
}

/// Normalizes `phrase` to NFC, splits it on whitespace, and resolves
/// each word (or unique prefix) to its table index, producing the
/// full `WORD_COUNT * WORD_BITS`-bit wire buffer including trailing
/// pad bits.
fn words_to_bits(phrase: &str) -> Result<BitBuffer, Error> {
    let normalized: String = phrase.nfc().collect();
    let words: Vec<&str> = normalized.split_whitespace().collect();
    if words.len() != WORD_COUNT {
        return Err(Error::WordCount(words.len()));
    }

    let mut bits = BitBuffer::new();
    for word in words {
        let index = wordlist::index_of(word)?;
        bits.push(index as u64, wordlist::WORD_BITS)?;
    }
    Ok(bits)
}

/// Splits a full `WORD_COUNT * WORD_BITS`-bit buffer into its words.
fn bits_to_words(buf: &BitBuffer) -> String {
    let mut cursor = buf.clone();
    let mut words = Vec::with_capacity(WORD_COUNT);
    for _ in 0..WORD_COUNT {
        let index = cursor
            .read(wordlist::WORD_BITS)
            .expect("buffer is sized to exactly WORD_COUNT words");
        words.push(wordlist::word_of(index as u16));
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(byte: u8) -> Seed {
        Seed::new([byte; 16])
    }

    #[test]
    fn plain_round_trip() {
        let s = seed(0x42);
        let t = CreationTime::from_offset(12345).unwrap();
        let phrase = encode_plain(&s, t).unwrap();
        let (s2, t2) = decode_plain(&phrase).unwrap();
        assert_eq!(s.as_bytes(), s2.as_bytes());
        assert_eq!(t, t2);
    }

    #[test]
    fn plain_phrase_has_expected_word_count() {
        let phrase = encode_plain(&seed(0), CreationTime::epoch()).unwrap();
        assert_eq!(phrase.split_whitespace().count(), WORD_COUNT);
    }

    #[test]
    fn all_zero_seed_at_epoch_begins_with_word_zero() {
        let phrase = encode_plain(&seed(0), CreationTime::epoch()).unwrap();
        let first = phrase.split_whitespace().next().unwrap();
        assert_eq!(first, wordlist::word_of(0));
    }

    #[test]
    fn range_boundary_offsets_round_trip() {
        for offset in [0u16, crate::types::MAX_CREATION_OFFSET] {
            let t = CreationTime::from_offset(offset).unwrap();
            let phrase = encode_plain(&seed(7), t).unwrap();
            let (_, t2) = decode_plain(&phrase).unwrap();
            assert_eq!(t2.offset(), offset);
        }
    }

    #[test]
    fn encrypted_round_trip() {
        let s = seed(0xAA);
        let t = CreationTime::from_offset(5).unwrap();
        let phrase = encode_encrypted(&s, t, b"correct horse battery staple").unwrap();
        let (s2, t2) = decode_encrypted(&phrase, b"correct horse battery staple").unwrap();
        assert_eq!(s.as_bytes(), s2.as_bytes());
        assert_eq!(t, t2);
    }

    #[test]
    fn encrypted_phrase_rejects_wrong_password() {
        let phrase =
            encode_encrypted(&seed(0x01), CreationTime::epoch(), b"correct horse battery staple")
                .unwrap();
        let err = decode_encrypted(&phrase, b"Correct horse battery staple").unwrap_err();
        assert!(matches!(err, Error::ChecksumMismatch));
    }

    #[test]
    fn peek_version_distinguishes_phrase_kinds() {
        let plain = encode_plain(&seed(0), CreationTime::epoch()).unwrap();
        let enc = encode_encrypted(&seed(0), CreationTime::epoch(), b"pw").unwrap();
        assert_eq!(peek_version(&plain).unwrap(), Version::Plain);
        assert_eq!(peek_version(&enc).unwrap(), Version::Encrypted);
    }

    #[test]
    fn plain_decode_rejects_wrong_word_count() {
        let err = decode_plain("abandon abandon abandon").unwrap_err();
        assert!(matches!(err, Error::WordCount(3)));
    }

    #[test]
    fn word_prefixes_decode_identically() {
        let phrase = encode_plain(&seed(0x5A), CreationTime::from_offset(99).unwrap()).unwrap();
        let prefixed = phrase
            .split_whitespace()
            .map(|w| w[..4.min(w.len())].to_string())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(
            decode_plain(&phrase).unwrap().0.as_bytes(),
            decode_plain(&prefixed).unwrap().0.as_bytes()
        );
    }

    #[test]
    fn flipping_a_payload_word_breaks_the_checksum() {
        let s = seed(0x10);
        let t = CreationTime::from_offset(42).unwrap();
        let phrase = encode_plain(&s, t).unwrap();
        let mut words: Vec<&str> = phrase.split_whitespace().collect();
        let index = wordlist::index_of(words[1]).unwrap();
        let flipped = wordlist::word_of(index ^ 1);
        words[1] = flipped;
        let corrupted = words.join(" ");
        let err = decode_plain(&corrupted).unwrap_err();
        assert!(matches!(err, Error::ChecksumMismatch));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut payload = BitBuffer::new();
        payload.push(2, VERSION_BITS).unwrap();
        payload.push(0, CREATION_OFFSET_BITS).unwrap();
        payload.push_bytes(&[0u8; 16]);
        payload.push(0, RESERVED_BITS).unwrap();
        let checksum = checksum::checksum30(&payload);
        payload.push(checksum as u64, CHECKSUM_BITS).unwrap();
        payload.push(0, PAD_BITS).unwrap();

        let err = decode_plain(&bits_to_words(&payload)).unwrap_err();
        assert!(matches!(err, Error::UnknownVersion(2)));
    }

    #[test]
    fn nonzero_reserved_field_is_rejected() {
        let mut payload = BitBuffer::new();
        payload.push(VERSION_PLAIN, VERSION_BITS).unwrap();
        payload.push(0, CREATION_OFFSET_BITS).unwrap();
        payload.push_bytes(&[0u8; 16]);
        payload.push(1, RESERVED_BITS).unwrap();
        let checksum = checksum::checksum30(&payload);
        payload.push(checksum as u64, CHECKSUM_BITS).unwrap();
        payload.push(0, PAD_BITS).unwrap();

        let err = decode_plain(&bits_to_words(&payload)).unwrap_err();
        assert!(matches!(err, Error::ReservedNonZero));
    }

    #[test]
    fn convert_round_trip_plaintext_encrypted_plaintext() {
        let s = seed(0x77);
        let t = CreationTime::from_offset(365).unwrap();
        let plain = encode_plain(&s, t).unwrap();
        let (s1, t1) = decode_plain(&plain).unwrap();
        let enc = encode_encrypted(&s1, t1, b"hunter2").unwrap();
        let (s2, t2) = decode_encrypted(&enc, b"hunter2").unwrap();
        let plain2 = encode_plain(&s2, t2).unwrap();
        assert_eq!(plain, plain2);
    }
}

#[cfg(test)]
mod proptests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;

    fn to_seed(bytes: u128) -> Seed {
        Seed::new(bytes.to_be_bytes())
    }

    fn to_offset(raw: u16) -> u16 {
        raw & crate::types::MAX_CREATION_OFFSET
    }

    quickcheck! {
        fn plain_round_trips(raw_seed: u128, raw_offset: u16) -> bool {
            let s = to_seed(raw_seed);
            let t = CreationTime::from_offset(to_offset(raw_offset)).unwrap();
            let phrase = encode_plain(&s, t).unwrap();
            let (s2, t2) = decode_plain(&phrase).unwrap();
            s.as_bytes() == s2.as_bytes() && t == t2
        }

        fn encrypted_round_trips_with_matching_password(raw_seed: u128, raw_offset: u16, password: String) -> TestResult {
            if password.is_empty() {
                return TestResult::discard();
            }
            let s = to_seed(raw_seed);
            let t = CreationTime::from_offset(to_offset(raw_offset)).unwrap();
            let phrase = encode_encrypted(&s, t, password.as_bytes()).unwrap();
            let (s2, t2) = decode_encrypted(&phrase, password.as_bytes()).unwrap();
            TestResult::from_bool(s.as_bytes() == s2.as_bytes() && t == t2)
        }

        fn encrypted_rejects_mismatched_password(raw_seed: u128, raw_offset: u16, a: String, b: String) -> TestResult {
            if a == b {
                return TestResult::discard();
            }
            let s = to_seed(raw_seed);
            let t = CreationTime::from_offset(to_offset(raw_offset)).unwrap();
            let phrase = encode_encrypted(&s, t, a.as_bytes()).unwrap();
            TestResult::from_bool(decode_encrypted(&phrase, b.as_bytes()).is_err())
        }

        fn every_word_prefix_decodes_identically(raw_seed: u128, raw_offset: u16) -> bool {
            let s = to_seed(raw_seed);
            let t = CreationTime::from_offset(to_offset(raw_offset)).unwrap();
            let phrase = encode_plain(&s, t).unwrap();
            let prefixed = phrase
                .split_whitespace()
                .map(|w| w[..4.min(w.len())].to_string())
                .collect::<Vec<_>>()
                .join(" ");
            decode_plain(&phrase).unwrap() == decode_plain(&prefixed).unwrap()
        }

        fn flipping_one_payload_word_breaks_the_checksum(raw_seed: u128, raw_offset: u16, word_pick: u8) -> bool {
            let s = to_seed(raw_seed);
            let t = CreationTime::from_offset(to_offset(raw_offset)).unwrap();
            let phrase = encode_plain(&s, t).unwrap();

            // Every word in 0..12 falls entirely within the 154-bit
            // payload (12 * 12 == 144 < 154), so flipping its low bit
            // always changes the checksummed payload.
            let mut words: Vec<&str> = phrase.split_whitespace().collect();
            let target = (word_pick as usize) % 12;
            let index = wordlist::index_of(words[target]).unwrap();
            let flipped = wordlist::word_of(index ^ 1);
            words[target] = flipped;

            decode_plain(&words.join(" ")).is_err()
        }
    }
}
