use std::io::SeekFrom;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio::sync::{mpsc, watch};
use wtail_types::AccountingRecord;
use wtail_wire::{RECORD_SIZE, WireError};

use crate::error::{DecodeError, OpenError};
use crate::record::decode_record;

/// Outcome of [`TailCursor::wait_for_growth`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// The watched file was written to since the last consumed signal.
    Growth,
    /// Shutdown was requested, or the signal source went away.
    Shutdown,
}

/// Read cursor into a growing record file.
///
/// The cursor owns the open file handle, the byte offset of the next
/// unconsumed record, the wake-signal receiver, and a shutdown
/// receiver. The offset is the sole source of truth for "already
/// consumed" — it advances by exactly [`RECORD_SIZE`] per decoded
/// record and never moves on a short read, so a wake that arrives
/// before a full record was flushed simply re-attempts the same
/// position on the next signal.
///
/// ```text
///              start_at_end = false              start_at_end = true
///                     │                                  │
///                     ▼                                  ▼
///              ┌────────────┐   drained          ┌────────────┐
///              │ Replaying  │──────────────────▶ │    Idle    │◀─┐
///              └────────────┘                    └────────────┘  │
///                                                   │ wake       │ short read /
///                                                   ▼            │ record emitted
///                                                ┌────────────┐  │
///                                                │  Decoding  │──┘
///                                                └────────────┘
/// ```
///
/// The wake channel is a single slot with coalescing producers: any
/// number of writes collapse into one pending signal, which is enough
/// because the consumer always drains to short-read once woken.
///
/// One cursor per file. Tailing the same file from two cursors is
/// unsupported — each would consume the other's records.
pub struct TailCursor {
    file: File,
    offset: u64,
    wake: mpsc::Receiver<()>,
    shutdown: watch::Receiver<bool>,
}

impl TailCursor {
    /// Open a record file for tailing.
    ///
    /// With `start_at_end` the offset is placed at the current file
    /// end, so only records appended after this call are ever seen.
    /// Otherwise the offset starts at zero and pre-existing records
    /// are replayed by the first [`drain_available`](Self::drain_available).
    ///
    /// `wake` is the single-slot write-notification channel; `shutdown`
    /// flips to `true` to cancel a pending [`wait_for_growth`](Self::wait_for_growth).
    ///
    /// # Errors
    ///
    /// Returns [`OpenError`] if the file cannot be opened or its
    /// length cannot be read.
    pub async fn open(
        path: &Path,
        start_at_end: bool,
        wake: mpsc::Receiver<()>,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Self, OpenError> {
        let wrap = |source| OpenError {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).await.map_err(wrap)?;
        let offset = if start_at_end {
            file.metadata().await.map_err(wrap)?.len()
        } else {
            0
        };
        Ok(Self {
            file,
            offset,
            wake,
            shutdown,
        })
    }

    /// Byte offset of the next unconsumed record.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Decode every complete record currently available.
    ///
    /// Reads and decodes at the offset until the first short read,
    /// advancing by one record size per success. Never blocks waiting
    /// for file growth: a partial or absent record ends the loop
    /// immediately (and is not an error — it just means "caught up").
    ///
    /// Calling this again without an intervening write yields an
    /// empty vec.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Io`] on any read fault other than a
    /// short read.
    pub async fn drain_available(&mut self) -> Result<Vec<AccountingRecord>, DecodeError> {
        let mut records = Vec::new();
        loop {
            match self.decode_one().await {
                Ok(record) => records.push(record),
                Err(DecodeError::ShortRead { .. }) => break,
                Err(err) => return Err(err),
            }
        }
        tracing::debug!(
            count = records.len(),
            offset = self.offset,
            "drained available records"
        );
        Ok(records)
    }

    /// Suspend until the file was written to, or shutdown.
    ///
    /// This is the only suspension point in the system. Returns
    /// [`Wake::Shutdown`] when the shutdown flag flips, when the
    /// shutdown sender is dropped, or when the wake channel closes.
    pub async fn wait_for_growth(&mut self) -> Wake {
        tokio::select! {
            _ = self.shutdown.changed() => Wake::Shutdown,
            signal = self.wake.recv() => match signal {
                Some(()) => Wake::Growth,
                None => Wake::Shutdown,
            },
        }
    }

    /// Steady-state operation: wait for growth, then attempt exactly
    /// one decode.
    ///
    /// Returns `None` on shutdown. A wake that covers less than one
    /// full record (partial flush, spurious signal) surfaces as
    /// `Some(Err(DecodeError::ShortRead { .. }))` — the offset is
    /// untouched and the caller decides whether to wait again.
    pub async fn next(&mut self) -> Option<Result<AccountingRecord, DecodeError>> {
        match self.wait_for_growth().await {
            Wake::Shutdown => None,
            Wake::Growth => Some(self.decode_one().await),
        }
    }

    /// Read one block at the offset and decode it, advancing the
    /// offset only on success.
    async fn decode_one(&mut self) -> Result<AccountingRecord, DecodeError> {
        let block = self.read_block().await?;
        let record = decode_record(&block).map_err(|err| match err {
            WireError::UnexpectedEof { wanted, got } => DecodeError::ShortRead {
                offset: self.offset,
                available: got,
                wanted,
            },
        })?;
        self.offset += RECORD_SIZE as u64;
        Ok(record)
    }

    /// Read exactly one record block at the current offset.
    ///
    /// Seeks to the offset on every attempt, so a previous partial
    /// read can never desynchronize the cursor.
    async fn read_block(&mut self) -> Result<[u8; RECORD_SIZE], DecodeError> {
        self.file.seek(SeekFrom::Start(self.offset)).await?;
        let mut block = [0u8; RECORD_SIZE];
        let mut filled = 0;
        while filled < RECORD_SIZE {
            let n = self.file.read(&mut block[filled..]).await?;
            if n == 0 {
                return Err(DecodeError::ShortRead {
                    offset: self.offset,
                    available: filled,
                    wanted: RECORD_SIZE,
                });
            }
            filled += n;
        }
        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use wtail_types::RecordKind;
    use wtail_wire::layout::{KIND_OFFSET, PID_OFFSET};

    use super::*;

    fn record_bytes(pid: i32) -> Vec<u8> {
        let mut block = vec![0u8; RECORD_SIZE];
        block[KIND_OFFSET..KIND_OFFSET + 2].copy_from_slice(&7i16.to_le_bytes());
        block[PID_OFFSET..PID_OFFSET + 4].copy_from_slice(&pid.to_le_bytes());
        block
    }

    fn channels() -> (
        mpsc::Sender<()>,
        mpsc::Receiver<()>,
        watch::Sender<bool>,
        watch::Receiver<bool>,
    ) {
        let (wake_tx, wake_rx) = mpsc::channel(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        (wake_tx, wake_rx, shutdown_tx, shutdown_rx)
    }

    #[tokio::test]
    async fn drain_stops_at_partial_record() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        for pid in 1..=3 {
            tmp.write_all(&record_bytes(pid)).unwrap();
        }
        // Half a record: must not be consumed.
        tmp.write_all(&record_bytes(4)[..RECORD_SIZE / 2]).unwrap();
        tmp.flush().unwrap();

        let (_wake_tx, wake_rx, _shutdown_tx, shutdown_rx) = channels();
        let mut cursor = TailCursor::open(tmp.path(), false, wake_rx, shutdown_rx)
            .await
            .unwrap();

        let records = cursor.drain_available().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records.iter().map(|r| r.pid).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(cursor.offset(), 3 * RECORD_SIZE as u64);

        // No intervening writes: draining again yields nothing.
        assert!(cursor.drain_available().await.unwrap().is_empty());
        assert_eq!(cursor.offset(), 3 * RECORD_SIZE as u64);
    }

    #[tokio::test]
    async fn open_at_end_skips_existing_records() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&record_bytes(1)).unwrap();
        tmp.flush().unwrap();

        let (wake_tx, wake_rx, _shutdown_tx, shutdown_rx) = channels();
        let mut cursor = TailCursor::open(tmp.path(), true, wake_rx, shutdown_rx)
            .await
            .unwrap();
        assert_eq!(cursor.offset(), RECORD_SIZE as u64);
        assert!(cursor.drain_available().await.unwrap().is_empty());

        // Append one record after open, signal once.
        tmp.write_all(&record_bytes(2)).unwrap();
        tmp.flush().unwrap();
        wake_tx.send(()).await.unwrap();

        let record = cursor.next().await.unwrap().unwrap();
        assert_eq!(record.pid, 2);
        assert_eq!(record.kind, RecordKind::UserProcess);
        assert!(cursor.drain_available().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn spurious_wake_surfaces_short_read() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&record_bytes(1)[..10]).unwrap();
        tmp.flush().unwrap();

        let (wake_tx, wake_rx, _shutdown_tx, shutdown_rx) = channels();
        let mut cursor = TailCursor::open(tmp.path(), false, wake_rx, shutdown_rx)
            .await
            .unwrap();

        wake_tx.send(()).await.unwrap();
        let result = cursor.next().await.unwrap();
        assert!(matches!(
            result,
            Err(DecodeError::ShortRead { offset: 0, available: 10, .. })
        ));
        assert_eq!(cursor.offset(), 0);

        // Writer finishes the record; the same position decodes now.
        tmp.write_all(&record_bytes(1)[10..]).unwrap();
        tmp.flush().unwrap();
        wake_tx.send(()).await.unwrap();
        let record = cursor.next().await.unwrap().unwrap();
        assert_eq!(record.pid, 1);
    }

    #[tokio::test]
    async fn shutdown_cancels_wait() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&record_bytes(1)).unwrap();
        tmp.flush().unwrap();

        let (_wake_tx, wake_rx, shutdown_tx, shutdown_rx) = channels();
        let mut cursor = TailCursor::open(tmp.path(), true, wake_rx, shutdown_rx)
            .await
            .unwrap();

        shutdown_tx.send(true).unwrap();
        assert!(cursor.next().await.is_none());
    }

    #[tokio::test]
    async fn dropped_wake_sender_is_shutdown() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&record_bytes(1)).unwrap();
        tmp.flush().unwrap();

        let (wake_tx, wake_rx, _shutdown_tx, shutdown_rx) = channels();
        let mut cursor = TailCursor::open(tmp.path(), true, wake_rx, shutdown_rx)
            .await
            .unwrap();

        drop(wake_tx);
        assert_eq!(cursor.wait_for_growth().await, Wake::Shutdown);
    }
}
