use wtail_decoder::DecodeError;

/// A record could not be rendered for the sink.
///
/// Fatal — the driver terminates rather than silently dropping a
/// record from the stream.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that terminate the streaming driver.
///
/// Short reads never reach this type — they are recovered inside the
/// drive loop by waiting for the next wake signal. Everything that
/// does reach it ends the process.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The cursor hit an unrecoverable read fault.
    #[error("tail failed: {0}")]
    Tail(#[from] DecodeError),

    /// A record could not be rendered.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The sink write failed.
    #[error("sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}
