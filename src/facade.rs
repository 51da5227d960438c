//! The three one-shot operations a front-end composes around: a CLI,
//! a GUI wizard, anything else this crate doesn't know about.
//!
//! Each function is a pure composition of the lower modules: no
//! locks, no queues, no shared mutable state. Callers on different
//! threads can invoke these concurrently as long as each owns its own
//! inputs, including its own RNG.

use std::time::SystemTime;

use rand_core::{CryptoRng, RngCore};

use crate::mnemonic;
use crate::pgp::{self, PgpKeyMaterial};
use crate::types::{CreationTime, Seed, Ttl, UserId};
use crate::Error;

/// Generates a fresh (or caller-supplied) identity: a recovery phrase
/// and the armored PGP transferable secret key it encodes.
///
/// `password`, when supplied, both encrypts the returned phrase and
/// S2K-protects the secret material in `armored_pgp` — two
/// independent protections bundled under one parameter.
pub fn generate<R: RngCore + CryptoRng>(
    rng: &mut R,
    seed: Option<Seed>,
    creation_time: Option<CreationTime>,
    user_id: &UserId,
    ttl: Option<Ttl>,
    password: Option<&[u8]>,
) -> crate::Result<(String, String)> {
    let seed = seed.unwrap_or_else(|| Seed::random(rng));
    let creation_time = match creation_time {
        Some(t) => t,
        None => CreationTime::from_system_time(SystemTime::now())
            .map_err(|e| Error::InputValidation(e.to_string()))?,
    };

    let phrase = match password {
        Some(pw) => mnemonic::encode_encrypted(&seed, creation_time, pw)?,
        None => mnemonic::encode_plain(&seed, creation_time)?,
    };

    let material = PgpKeyMaterial::derive(&seed, creation_time)
        .map_err(|e| Error::DerivationFailure(e.to_string()))?;
    let armored = pgp::build_private_key_block(&material, user_id, ttl, password, rng);

    Ok((phrase, armored))
}

/// Recovers the armored PGP transferable secret key encoded by
/// `phrase`, binding it to `user_id`.
///
/// `password` unlocks an encrypted phrase (required; its absence or
/// incorrectness both surface as an error that never reveals which)
/// and, if supplied, also S2K-protects the returned secret material.
pub fn recover<R: RngCore + CryptoRng>(
    rng: &mut R,
    phrase: &str,
    password: Option<&[u8]>,
    user_id: &UserId,
    ttl: Option<Ttl>,
) -> crate::Result<String> {
    let (seed, creation_time) = decode(phrase, password)?;

    let material = PgpKeyMaterial::derive(&seed, creation_time)
        .map_err(|e| Error::DerivationFailure(e.to_string()))?;
    Ok(pgp::build_private_key_block(&material, user_id, ttl, password, rng))
}

/// Decodes `phrase`, re-encoding it under `new_password` (or in
/// plaintext, if `new_password` is `None`) while keeping its seed and
/// creation time unchanged.
pub fn convert(
    phrase: &str,
    old_password: Option<&[u8]>,
    new_password: Option<&[u8]>,
) -> crate::Result<String> {
    let (seed, creation_time) = decode(phrase, old_password)?;

    let phrase = match new_password {
        Some(pw) => mnemonic::encode_encrypted(&seed, creation_time, pw)?,
        None => mnemonic::encode_plain(&seed, creation_time)?,
    };
    Ok(phrase)
}

/// Shared decode path for [`recover`] and [`convert`]: dispatches on
/// the phrase's wire version, mapping a missing or wrong password to
/// the dedicated facade errors rather than letting a raw checksum
/// mismatch leak which of the two happened.
fn decode(phrase: &str, password: Option<&[u8]>) -> crate::Result<(Seed, CreationTime)> {
    match mnemonic::peek_version(phrase)? {
        mnemonic::Version::Plain => Ok(mnemonic::decode_plain(phrase)?),
        mnemonic::Version::Encrypted => {
            let password = password.ok_or(Error::PasswordRequired)?;
            mnemonic::decode_encrypted(phrase, password).map_err(|e| match e {
                mnemonic::Error::ChecksumMismatch => Error::PasswordIncorrect.into(),
                other => Error::from(other).into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn user_id() -> UserId {
        UserId::new("Alice <alice@example.com>").unwrap()
    }

    #[test]
    fn generate_then_recover_yields_same_armored_key_material() {
        let mut rng = StdRng::seed_from_u64(1);
        let seed = Seed::new([0x55u8; 16]);
        let time = CreationTime::from_offset(42).unwrap();
        let (phrase, armored_a) =
            generate(&mut rng, Some(seed), Some(time), &user_id(), None, None).unwrap();

        let mut rng2 = StdRng::seed_from_u64(2);
        let armored_b = recover(&mut rng2, &phrase, None, &user_id(), None).unwrap();

        assert_eq!(armored_a, armored_b);
    }

    #[test]
    fn recover_requires_password_for_encrypted_phrase() {
        let mut rng = StdRng::seed_from_u64(3);
        let (phrase, _) = generate(
            &mut rng,
            Some(Seed::new([0x66u8; 16])),
            Some(CreationTime::epoch()),
            &user_id(),
            None,
            Some(b"hunter2"),
        )
        .unwrap();

        let mut rng2 = StdRng::seed_from_u64(4);
        let err = recover(&mut rng2, &phrase, None, &user_id(), None).unwrap_err();
        assert!(err.downcast_ref::<Error>().is_some());
    }

    #[test]
    fn convert_round_trip_preserves_identity() {
        let mut rng = StdRng::seed_from_u64(5);
        let (plain_phrase, armored_before) = generate(
            &mut rng,
            Some(Seed::new([0x77u8; 16])),
            Some(CreationTime::from_offset(9).unwrap()),
            &user_id(),
            None,
            None,
        )
        .unwrap();

        let encrypted = convert(&plain_phrase, None, Some(b"hunter2")).unwrap();
        let back_to_plain = convert(&encrypted, Some(b"hunter2"), None).unwrap();
        assert_eq!(back_to_plain, plain_phrase);

        let mut rng2 = StdRng::seed_from_u64(6);
        let armored_after = recover(&mut rng2, &back_to_plain, None, &user_id(), None).unwrap();
        assert_eq!(armored_before, armored_after);
    }
}
