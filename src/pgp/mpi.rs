//! Multi-precision integer encoding (RFC 4880 §3.2).
//!
//! An MPI on the wire is a two-byte big-endian bit count followed by
//! that many bits' worth of big-endian bytes, with the bit count
//! reflecting the position of the topmost set bit of the first byte
//! (not just the byte count). This crate only ever encodes two shapes
//! of MPI: plain big-endian integers (Ed25519 signature scalars) and
//! the `0x40`-prefixed "native point" encoding RFC 4880bis assigns to
//! Ed25519/X25519 public points, grounded on the same framing the
//! teacher's `MPI::new`/`MPI::bits` use for Weierstrass points.

/// Encodes `value` as an MPI, stripping any leading zero bytes first.
///
/// An all-zero `value` encodes as a zero-length, zero-bit-count MPI.
pub fn encode(value: &[u8]) -> Vec<u8> {
    let first_nonzero = value.iter().position(|&b| b != 0);
    let trimmed = match first_nonzero {
        Some(i) => &value[i..],
        None => &[][..],
    };

    let bits = if trimmed.is_empty() {
        0u16
    } else {
        let leading = trimmed[0].leading_zeros() as u16;
        (trimmed.len() as u16) * 8 - leading
    };

    let mut out = Vec::with_capacity(2 + trimmed.len());
    out.extend_from_slice(&bits.to_be_bytes());
    out.extend_from_slice(trimmed);
    out
}

/// Encodes a 32-byte Curve25519/Ed25519 point in RFC 4880bis's native
/// point format: a leading `0x40` tag byte, then the point itself.
///
/// The `0x40` tag is never zero, so [`encode`]'s leading-zero-stripping
/// never touches it; the resulting bit count is always `33 * 8 - 1 =
/// 263`, matching every other OpenPGP implementation's quirky encoding
/// of this field.
pub fn encode_native_point(point: &[u8; 32]) -> Vec<u8> {
    let mut tagged = [0u8; 33];
    tagged[0] = 0x40;
    tagged[1..].copy_from_slice(point);
    encode(&tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_reports_exact_bit_count() {
        let mpi = encode(&[0x01]);
        assert_eq!(&mpi, &[0x00, 0x01, 0x01]);
    }

    #[test]
    fn encode_strips_leading_zero_bytes() {
        let mpi = encode(&[0x00, 0x00, 0xFF]);
        assert_eq!(&mpi, &[0x00, 0x08, 0xFF]);
    }

    #[test]
    fn encode_of_all_zeros_is_empty() {
        let mpi = encode(&[0x00, 0x00]);
        assert_eq!(&mpi, &[0x00, 0x00]);
    }

    #[test]
    fn native_point_has_263_bit_count() {
        let point = [0xFFu8; 32];
        let mpi = encode_native_point(&point);
        let bits = u16::from_be_bytes([mpi[0], mpi[1]]);
        assert_eq!(bits, 263);
        assert_eq!(mpi[2], 0x40);
        assert_eq!(&mpi[3..], &point[..]);
    }
}
