/// Configuration for the streaming driver.
///
/// ```text
/// ┌─────────┬─────────────────────────────────────────────────────┐
/// │ Field   │ Purpose                                             │
/// ├─────────┼─────────────────────────────────────────────────────┤
/// │ format  │ Selects the JSON or CSV line rendering              │
/// │ replay  │ Forward pre-existing records before going live      │
/// └─────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// `replay` must match how the cursor was opened: a cursor opened at
/// the file end has nothing to replay, so the initial drain is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriverConfig {
    /// Line rendering for the sink.
    pub format: OutputFormat,

    /// Forward every record already in the file before waiting for
    /// new ones.
    pub replay: bool,
}

/// Line rendering selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per record.
    #[default]
    Json,
    /// One comma-separated line per record.
    Csv,
}
