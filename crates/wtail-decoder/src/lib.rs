#![warn(clippy::pedantic)]

pub mod error;
pub mod record;
pub mod tail;

pub use error::{DecodeError, OpenError};
pub use record::decode_record;
pub use tail::{TailCursor, Wake};
