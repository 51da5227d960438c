//! Deterministic key derivation.
//!
//! Two independent domains share one Argon2id configuration but must
//! never be mixed: [`password`] stretches a user-supplied phrase
//! password into a cipher key for protecting the mnemonic itself
//! (§4.D), while [`derive`] stretches a [`crate::Seed`] into the root
//! material that [`derive::sign_key`] and [`derive::encrypt_key`]
//! expand, per role, into the two PGP key scalars (§4.F). All of it is
//! a pure function of its inputs: no clock, RNG, or environment state
//! is consulted.

pub mod derive;
pub mod password;

use argon2::{Config, ThreadMode, Variant, Version};

/// Errors raised by the derivation pipeline.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// Argon2id rejected its parameters, or the host could not supply
    /// the requested memory. Fatal.
    #[error("Argon2id derivation failed: {0}")]
    Argon2(String),
    /// HKDF was asked to expand more output than RFC 5869 allows for
    /// the hash function in use. Fatal; indicates a bug, since every
    /// call site here requests a fixed 32-byte output.
    #[error("HKDF expansion failed: {0}")]
    Hkdf(String),
}

/// Memory cost for every Argon2id invocation in this crate: 64 MiB.
const ARGON2_MEM_COST_KIB: u32 = 64 * 1024;
/// Iteration count for every Argon2id invocation in this crate.
const ARGON2_TIME_COST: u32 = 8;
/// Parallelism (lanes) for every Argon2id invocation in this crate.
const ARGON2_LANES: u32 = 4;

/// Runs Argon2id with the parameters mandated throughout this crate
/// (64 MiB, 8 iterations, 4 lanes), producing `out_len` bytes.
fn argon2id(secret: &[u8], salt: &[u8], out_len: u32) -> Result<Vec<u8>, Error> {
    let config = Config {
        variant: Variant::Argon2id,
        version: Version::Version13,
        mem_cost: ARGON2_MEM_COST_KIB,
        time_cost: ARGON2_TIME_COST,
        lanes: ARGON2_LANES,
        thread_mode: ThreadMode::Parallel,
        secret: &[],
        ad: &[],
        hash_length: out_len,
    };
    argon2::hash_raw(secret, salt, &config).map_err(|e| Error::Argon2(e.to_string()))
}
