use std::path::PathBuf;

/// Errors that can occur while reading and decoding records from the
/// backing file.
///
/// `ShortRead` is the only recoverable condition in the system: it
/// means "not enough bytes yet for one full record" and tells the
/// caller to stop draining and wait for the next wake signal. The
/// cursor's offset is untouched when it fires. Everything else is
/// fatal and propagates to the driver.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes than one full record were available at the offset.
    #[error("short read at offset {offset}: only {available} of {wanted} bytes available")]
    ShortRead {
        offset: u64,
        available: usize,
        wanted: usize,
    },

    /// The underlying read failed for any other reason.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Whether this error is the transient "wait for more bytes" case.
    #[must_use]
    pub fn is_short_read(&self) -> bool {
        matches!(self, Self::ShortRead { .. })
    }
}

/// The backing file could not be opened or positioned.
///
/// Fatal at startup — there is nothing to tail.
#[derive(Debug, thiserror::Error)]
#[error("failed to open {path}: {source}")]
pub struct OpenError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
