#![warn(clippy::pedantic)]

pub mod kind;
pub mod record;

pub use kind::RecordKind;
pub use record::{AccountingRecord, ExitStatus, TIME_LAYOUT};
