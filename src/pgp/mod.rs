//! Deterministic OpenPGP transferable-secret-key construction: derives
//! an Ed25519 signing key and a Curve25519 encryption subkey from a
//! seed, binds them to a user ID with v4 signatures, and serializes
//! the result as an ASCII-armored private key block.

mod armor;
mod fingerprint;
mod key;
mod mpi;
mod packet;
mod s2k;
mod serialize;
mod signature;

pub use fingerprint::{Fingerprint, KeyId};
pub use key::PgpKeyMaterial;
pub use serialize::build_private_key_block;
