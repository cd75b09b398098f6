use wtail_decoder::TailCursor;
use wtail_types::AccountingRecord;

use crate::config::{DriverConfig, OutputFormat};
use crate::error::DriverError;
use crate::render_csv::CsvRenderer;
use crate::render_json::JsonRenderer;
use crate::sink::Sink;

/// Drive the tail loop until shutdown or a fatal error.
///
/// With `config.replay` set, every record already in the file is
/// forwarded before the loop goes live. The steady state is then:
///
/// ```text
///   wait for wake ──▶ decode one ──▶ drain to short-read ──▶ wait …
///         │                │
///         │           ShortRead? log at debug, wait again
///         ▼
///      shutdown ──▶ Ok(())
/// ```
///
/// The catch-up drain after each decoded record matters: the wake
/// channel coalesces, so one signal may stand for any number of
/// appended records, and stopping after the first would strand the
/// rest until the next write.
///
/// # Errors
///
/// Everything except a short read is fatal: [`DriverError::Tail`] for
/// read faults, [`DriverError::Format`] for rendering failures,
/// [`DriverError::Sink`] for sink writes. The caller is expected to
/// terminate the process.
pub async fn run(
    cursor: &mut TailCursor,
    config: DriverConfig,
    sink: &mut Sink,
) -> Result<(), DriverError> {
    if config.replay {
        for record in cursor.drain_available().await? {
            emit(&record, config.format, sink).await?;
        }
    }

    loop {
        match cursor.next().await {
            None => {
                tracing::info!("shutdown requested, stopping tail");
                return Ok(());
            }
            Some(Ok(record)) => {
                emit(&record, config.format, sink).await?;
                // One wake may cover several appended records.
                for record in cursor.drain_available().await? {
                    emit(&record, config.format, sink).await?;
                }
            }
            Some(Err(err)) if err.is_short_read() => {
                tracing::debug!("spurious wake: {err}");
            }
            Some(Err(err)) => return Err(err.into()),
        }
    }
}

async fn emit(
    record: &AccountingRecord,
    format: OutputFormat,
    sink: &mut Sink,
) -> Result<(), DriverError> {
    let line = match format {
        OutputFormat::Json => JsonRenderer::render(record)?,
        OutputFormat::Csv => CsvRenderer::render(record),
    };
    sink.write_line(&line).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tokio::sync::{mpsc, watch};
    use wtail_wire::layout::{KIND_OFFSET, PID_OFFSET};
    use wtail_wire::RECORD_SIZE;

    use super::*;

    fn record_bytes(pid: i32) -> Vec<u8> {
        let mut block = vec![0u8; RECORD_SIZE];
        block[KIND_OFFSET..KIND_OFFSET + 2].copy_from_slice(&7i16.to_le_bytes());
        block[PID_OFFSET..PID_OFFSET + 4].copy_from_slice(&pid.to_le_bytes());
        block
    }

    async fn read_lines(path: &std::path::Path) -> Vec<String> {
        let text = tokio::fs::read_to_string(path).await.unwrap();
        text.lines().map(str::to_owned).collect()
    }

    #[tokio::test]
    async fn replay_then_live_then_shutdown() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(&record_bytes(1)).unwrap();
        input.flush().unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        let (wake_tx, wake_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut cursor = TailCursor::open(input.path(), false, wake_rx, shutdown_rx)
            .await
            .unwrap();
        let mut sink = Sink::open(Some(output.path())).await.unwrap();

        // Two more records appended before the loop starts; one wake
        // must be enough to catch up on both.
        input.write_all(&record_bytes(2)).unwrap();
        input.write_all(&record_bytes(3)).unwrap();
        input.flush().unwrap();
        wake_tx.send(()).await.unwrap();

        let config = DriverConfig {
            format: OutputFormat::Csv,
            replay: true,
        };
        let driver = tokio::spawn(async move {
            let result = run(&mut cursor, config, &mut sink).await;
            (result, cursor)
        });

        // Give the driver a moment to consume the wake, then stop it.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        shutdown_tx.send(true).unwrap();
        let (result, cursor) = driver.await.unwrap();
        result.unwrap();

        let lines = read_lines(output.path()).await;
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("7,1,"));
        assert!(lines[1].starts_with("7,2,"));
        assert!(lines[2].starts_with("7,3,"));
        assert_eq!(cursor.offset(), 3 * RECORD_SIZE as u64);
    }

    #[tokio::test]
    async fn no_replay_skips_existing_records() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(&record_bytes(1)).unwrap();
        input.flush().unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        let (_wake_tx, wake_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut cursor = TailCursor::open(input.path(), true, wake_rx, shutdown_rx)
            .await
            .unwrap();
        let mut sink = Sink::open(Some(output.path())).await.unwrap();

        shutdown_tx.send(true).unwrap();
        run(&mut cursor, DriverConfig::default(), &mut sink)
            .await
            .unwrap();

        assert!(read_lines(output.path()).await.is_empty());
    }
}
