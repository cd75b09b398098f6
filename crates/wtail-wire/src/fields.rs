//! Endianness-aware field extraction primitives.
//!
//! Every reader takes the whole record block plus an offset from
//! [`layout`](crate::layout) and returns an owned value. Callers are
//! expected to have validated the block length once up front (see
//! [`check_block_len`]); the individual readers then index freely.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::WireError;
use crate::layout::{ADDR_LEN, RECORD_SIZE};

/// Validate that `block` holds exactly one full record.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedEof`] if `block` is shorter than
/// [`RECORD_SIZE`]. Longer input is also rejected — the caller reads
/// blocks of exactly one record, so anything else is a bug upstream.
pub fn check_block_len(block: &[u8]) -> Result<(), WireError> {
    if block.len() != RECORD_SIZE {
        return Err(WireError::UnexpectedEof {
            wanted: RECORD_SIZE,
            got: block.len(),
        });
    }
    Ok(())
}

/// Read a little-endian `i16` at `offset`.
#[must_use]
pub fn read_i16_le(block: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([block[offset], block[offset + 1]])
}

/// Read a little-endian `i32` at `offset`.
#[must_use]
pub fn read_i32_le(block: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes([
        block[offset],
        block[offset + 1],
        block[offset + 2],
        block[offset + 3],
    ])
}

/// Extract a fixed-width padded text field.
///
/// Strips every NUL byte in the field, embedded ones included — the
/// writer treats anything after the logical string end as padding, and
/// a NUL anywhere in the field is never part of the value. This is
/// deliberately not "cut at the first NUL": a field holding
/// `ab\0cd\0\0...` reads back as `abcd`. Remaining bytes are decoded
/// as UTF-8, lossily.
#[must_use]
pub fn read_text(block: &[u8], offset: usize, len: usize) -> String {
    let stripped: Vec<u8> = block[offset..offset + len]
        .iter()
        .copied()
        .filter(|&b| b != 0)
        .collect();
    String::from_utf8_lossy(&stripped).into_owned()
}

/// Reconstruct a timestamp from the on-disk `(tv_sec, tv_usec)` pair.
///
/// Microseconds are scaled to nanoseconds (×1000, never truncated) and
/// carried into the seconds component, so the returned nanosecond part
/// is always in `0..1_000_000_000` even for negative or oversized
/// microsecond values.
#[must_use]
pub fn read_timeval(sec: i32, usec: i32) -> (i64, u32) {
    let total_ns = i64::from(sec) * 1_000_000_000 + i64::from(usec) * 1_000;
    let sec = total_ns.div_euclid(1_000_000_000);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nsec = total_ns.rem_euclid(1_000_000_000) as u32;
    (sec, nsec)
}

/// Normalize the 16-byte address field into an [`IpAddr`].
///
/// The field is IPv6-capable; if the last 12 bytes are all zero the
/// value is treated as IPv4 with only the first 4 bytes significant.
/// Note this checks the raw zero suffix, not the `::ffff:` mapped
/// prefix convention — that is the rule the log writer uses.
#[must_use]
pub fn read_addr(block: &[u8], offset: usize) -> IpAddr {
    let raw: [u8; ADDR_LEN] = block[offset..offset + ADDR_LEN]
        .try_into()
        .unwrap_or([0; ADDR_LEN]);
    if raw[4..] == [0u8; 12] {
        IpAddr::V4(Ipv4Addr::new(raw[0], raw[1], raw[2], raw[3]))
    } else {
        IpAddr::V6(Ipv6Addr::from(raw))
    }
}
