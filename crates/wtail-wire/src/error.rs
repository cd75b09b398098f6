/// Errors produced while extracting fields from a raw record block.
///
/// The format itself carries no checksum or validity flag, so content
/// never fails to parse — the only failure mode at this layer is a
/// block that is smaller than the fixed record size.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The block is shorter than one full record.
    #[error("record block too short: wanted {wanted} bytes, got {got}")]
    UnexpectedEof { wanted: usize, got: usize },
}
