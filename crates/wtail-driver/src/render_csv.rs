use wtail_types::{AccountingRecord, TIME_LAYOUT};

/// CSV line rendering: `type,pid,device,user,id,host,time`.
///
/// A narrower projection than the JSON rendering — no exit status,
/// session or address. Field values are emitted verbatim; the record
/// fields this covers cannot themselves contain commas.
pub struct CsvRenderer;

impl CsvRenderer {
    /// Render one record as a comma-separated line. Infallible.
    #[must_use]
    pub fn render(record: &AccountingRecord) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            record.kind.code(),
            record.pid,
            record.device,
            record.user,
            record.line_id,
            record.host,
            record.time.format(TIME_LAYOUT),
        )
    }
}
