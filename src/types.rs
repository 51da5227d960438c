//! Small validated value types shared across the crate.

use std::time::{Duration, SystemTime};

use lazy_static::lazy_static;
use regex::Regex;

use crate::mem::Protected;

/// Seconds from the Unix epoch to the mnemonikey epoch,
/// `2022-01-01T00:00:00Z`.
const MNEMONIKEY_EPOCH_UNIX: u64 = 1_640_995_200;

/// One day, in seconds.
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The largest representable creation offset: a 15-bit field holds
/// `0..=0x7FFF` days (about 89 years) past the mnemonikey epoch.
pub const MAX_CREATION_OFFSET: u16 = 0x7FFF;

/// 128 bits of random root entropy backing a derived PGP identity.
///
/// Exclusively owned by its holder, never transmitted, and zeroized
/// when dropped.
#[derive(Clone, PartialEq)]
pub struct Seed(Protected<16>);

impl Seed {
    /// Wraps 16 bytes of entropy as a seed.
    pub fn new(bytes: [u8; 16]) -> Self {
        Seed(Protected::new(bytes))
    }

    /// Draws a fresh seed from `rng`.
    ///
    /// `rng` is an injected capability so tests can substitute
    /// deterministic entropy; `generate` is the only facade operation
    /// that needs one.
    pub fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Seed::new(bytes)
    }

    /// Returns the 16 seed bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Seed(REDACTED)")
    }
}

/// Days since the mnemonikey epoch (`2022-01-01T00:00:00Z`), stored on
/// the wire in 15 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreationTime(u16);

/// Errors constructing a [`CreationTime`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The wall-clock time is before the mnemonikey epoch, or the
    /// resulting offset exceeds the 15-bit field.
    #[error("creation time is out of the representable range (epoch {MNEMONIKEY_EPOCH_UNIX} .. +{MAX_CREATION_OFFSET} days)")]
    OutOfRange,
}

impl CreationTime {
    /// The mnemonikey epoch itself: `creation_offset == 0`.
    pub fn epoch() -> Self {
        CreationTime(0)
    }

    /// Builds a `CreationTime` from a raw 15-bit day offset.
    pub fn from_offset(offset: u16) -> Result<Self, Error> {
        if offset > MAX_CREATION_OFFSET {
            return Err(Error::OutOfRange);
        }
        Ok(CreationTime(offset))
    }

    /// Builds a `CreationTime` from a wall-clock instant, rounding
    /// down to whole days since the mnemonikey epoch.
    pub fn from_system_time(t: SystemTime) -> Result<Self, Error> {
        let unix = t
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| Error::OutOfRange)?
            .as_secs();
        let since_epoch = unix.checked_sub(MNEMONIKEY_EPOCH_UNIX).ok_or(Error::OutOfRange)?;
        let days = since_epoch / SECONDS_PER_DAY;
        let offset = u16::try_from(days).map_err(|_| Error::OutOfRange)?;
        CreationTime::from_offset(offset)
    }

    /// The raw 15-bit day offset.
    pub fn offset(&self) -> u16 {
        self.0
    }

    /// Converts back to a wall-clock instant (midnight UTC on the
    /// relevant day).
    pub fn to_system_time(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH
            + Duration::from_secs(
                MNEMONIKEY_EPOCH_UNIX + self.0 as u64 * SECONDS_PER_DAY,
            )
    }

    /// Seconds since the Unix epoch, as used by OpenPGP packet
    /// creation-time fields.
    pub fn to_unix_seconds(&self) -> u32 {
        (MNEMONIKEY_EPOCH_UNIX + self.0 as u64 * SECONDS_PER_DAY) as u32
    }
}

/// A validated time-to-live for a generated key's expiration
/// subpacket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ttl(Duration);

impl Ttl {
    /// Builds a TTL from a duration, rejecting zero (an expired key on
    /// arrival is never useful and almost certainly a caller bug).
    pub fn new(d: Duration) -> Result<Self, crate::Error> {
        if d.is_zero() {
            return Err(crate::Error::InputValidation("TTL must be non-zero".into()));
        }
        Ok(Ttl(d))
    }

    /// The TTL as seconds, the unit OpenPGP's key expiration
    /// subpacket uses.
    pub fn as_secs(&self) -> u32 {
        self.0.as_secs().min(u32::MAX as u64) as u32
    }
}

/// A validated OpenPGP user ID: `Name <Email>` or
/// `Name (Comment) <Email>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(String);

lazy_static! {
    /// Matches the two user ID shapes this crate accepts. Deliberately
    /// narrower than full RFC 5322, since the facade only needs to
    /// validate what it is about to embed verbatim into a packet, not
    /// parse arbitrary mail headers.
    static ref USER_ID_PATTERN: Regex = Regex::new(
        r"(?x)
        ^
        (?P<name>[^<>()]+?)
        \x20
        (?:\((?P<comment>[^()]+)\)\x20)?
        <(?P<email>[^\s<>@]+@[^\s<>@]+\.[^\s<>@]+)>
        $
        "
    ).unwrap();
}

impl UserId {
    /// Validates and wraps a user ID string.
    pub fn new(s: impl Into<String>) -> Result<Self, crate::Error> {
        let s = s.into();
        if !USER_ID_PATTERN.is_match(&s) {
            return Err(crate::Error::InputValidation(format!(
                "user ID {s:?} is not `Name <Email>` or `Name (Comment) <Email>`"
            )));
        }
        Ok(UserId(s))
    }

    /// The full `Name <Email>` (or `Name (Comment) <Email>`) string,
    /// exactly as it will be embedded in the User ID packet.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_time_epoch_roundtrip() {
        let t = CreationTime::epoch();
        assert_eq!(t.offset(), 0);
        assert_eq!(t.to_unix_seconds(), MNEMONIKEY_EPOCH_UNIX as u32);
    }

    #[test]
    fn creation_time_max_offset_roundtrips() {
        let t = CreationTime::from_offset(MAX_CREATION_OFFSET).unwrap();
        assert_eq!(t.offset(), MAX_CREATION_OFFSET);
    }

    #[test]
    fn creation_time_rejects_overflow() {
        assert_eq!(
            CreationTime::from_offset(0x8000),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn creation_time_from_system_time_roundtrips() {
        let t = CreationTime::from_offset(100).unwrap();
        let st = t.to_system_time();
        let t2 = CreationTime::from_system_time(st).unwrap();
        assert_eq!(t, t2);
    }

    #[test]
    fn user_id_accepts_plain_form() {
        assert!(UserId::new("Alice Example <alice@example.com>").is_ok());
    }

    #[test]
    fn user_id_accepts_comment_form() {
        assert!(UserId::new("Alice Example (work) <alice@example.com>").is_ok());
    }

    #[test]
    fn user_id_rejects_missing_email() {
        assert!(UserId::new("Alice Example").is_err());
    }

    #[test]
    fn ttl_rejects_zero() {
        assert!(Ttl::new(Duration::from_secs(0)).is_err());
    }

    #[test]
    fn ttl_accepts_positive() {
        let ttl = Ttl::new(Duration::from_secs(3600)).unwrap();
        assert_eq!(ttl.as_secs(), 3600);
    }
}
