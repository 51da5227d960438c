//! Deterministic backup and recovery of OpenPGP identities.
//!
//! From a small random [`Seed`](types::Seed) and a creation timestamp,
//! this crate deterministically derives an Ed25519 primary signing key
//! and a Curve25519 encryption subkey, emits a fully-formed OpenPGP
//! transferable secret key packet stream (see [`pgp`]), and encodes
//! the seed and timestamp as a 14-word recovery phrase (see
//! [`mnemonic`]) that a user can write down. Given the phrase, the
//! identical PGP key can be reconstructed on any machine, at any time
//! (see [`mnemonic`] for why that phrase is 16 words, not 14).
//!
//! A non-goal of this crate is anything to do with how the phrase or
//! the resulting key material reach the user: no terminal UI, no file
//! I/O, no clipboard integration. [`facade`] exposes the three
//! operations ([`facade::generate`], [`facade::recover`],
//! [`facade::convert`]) that a front-end composes those concerns
//! around.

#![warn(missing_docs)]

extern crate rand;

pub mod checksum;
pub mod bits;
mod wordlist_data;
pub mod wordlist;
pub mod mem;
pub mod types;
pub mod kdf;
pub mod mnemonic;
pub mod pgp;
pub mod facade;

pub use types::{CreationTime, Seed, Ttl, UserId};
pub use facade::{convert, generate, recover};

/// Crate result specialization.
///
/// Internal components return their own narrow `thiserror` error
/// enums (see [`mnemonic::Error`], [`kdf::Error`]; packet assembly in
/// [`pgp`] is infallible once key derivation succeeds); this is the
/// error type the facade functions in [`facade`] return, matching the
/// taxonomy in the design notes.
pub type Result<T> = ::std::result::Result<T, anyhow::Error>;

#[derive(thiserror::Error, Debug)]
/// Errors returned at the facade boundary.
///
/// Note: this enum cannot be exhaustively matched to allow future
/// extensions.
pub enum Error {
    /// Malformed user ID, negative TTL, or out-of-range creation time.
    #[error("Invalid input: {0}")]
    InputValidation(String),

    /// A recovery phrase failed to decode.
    #[error("Malformed recovery phrase: {0}")]
    MnemonicFormat(#[from] mnemonic::Error),

    /// The phrase is password-protected but no password was supplied.
    #[error("This recovery phrase is password-protected")]
    PasswordRequired,

    /// The supplied password did not unlock the phrase.
    ///
    /// Indistinguishable on the wire from phrase corruption: the
    /// message intentionally does not say which.
    #[error("Wrong password, or the recovery phrase is corrupt")]
    PasswordIncorrect,

    /// Argon2id or HKDF rejected their parameters or ran out of
    /// resources. Fatal.
    #[error("Key derivation failed: {0}")]
    DerivationFailure(String),

    /// An internal invariant about packet or MPI sizes was violated.
    /// Fatal; indicates a bug.
    #[error("Failed to serialize OpenPGP packet: {0}")]
    Serialization(String),

    /// The system CSPRNG failed to produce a fresh seed.
    #[error("Failed to generate entropy: {0}")]
    Entropy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_never_echo_secrets() {
        let e = Error::PasswordIncorrect;
        assert_eq!(e.to_string(), "Wrong password, or the recovery phrase is corrupt");
    }
}
