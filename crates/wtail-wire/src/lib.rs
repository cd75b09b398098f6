#![warn(clippy::pedantic)]

//! On-disk layout of login-accounting records.
//!
//! This crate owns the byte-level knowledge: where each field lives
//! inside the fixed 384-byte record, and how to pull integers, padded
//! strings, timestamps and addresses out of it. It performs no I/O and
//! never overlays a struct onto raw memory — every field is extracted
//! through the explicit offset table in [`layout`], so host padding
//! and alignment rules never leak into the format.

pub mod error;
pub mod fields;
pub mod layout;

pub use error::WireError;
pub use layout::RECORD_SIZE;
