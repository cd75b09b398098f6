use std::io;
use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, Stdout};

/// Destination for rendered record lines.
///
/// Either standard output or an append-mode file (created if absent).
/// Each line is flushed immediately — the whole point of the tool is a
/// live stream, so buffering a record until the next one arrives would
/// defeat it.
pub enum Sink {
    Stdout(Stdout),
    File(File),
}

impl Sink {
    /// Open the sink: a file in append mode when `path` is given,
    /// stdout otherwise.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be created
    /// or opened for appending.
    pub async fn open(path: Option<&Path>) -> io::Result<Self> {
        match path {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                Ok(Self::File(file))
            }
            None => Ok(Self::Stdout(tokio::io::stdout())),
        }
    }

    /// Write one rendered line plus a trailing newline, then flush.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error on write or flush failure.
    pub async fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout(out) => {
                out.write_all(line.as_bytes()).await?;
                out.write_all(b"\n").await?;
                out.flush().await
            }
            Self::File(file) => {
                file.write_all(line.as_bytes()).await?;
                file.write_all(b"\n").await?;
                file.flush().await
            }
        }
    }
}
