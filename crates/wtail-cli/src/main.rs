/// `wtail` — live-stream login accounting records from a wtmp/utmp
/// style file.
///
/// Tails the input file and emits one rendered line per appended
/// record, as it arrives. By default only records appended after
/// startup are streamed; `--from-start` replays the whole file first.
///
/// ```text
/// wtail --input <PATH> [OPTIONS]
///
/// Options:
///   -i, --input <PATH>    Record file to tail, e.g. /var/log/wtmp
///   -o, --output <PATH>   Append output here instead of stdout
///   -s, --from-start      Replay existing records before going live
///   -f, --format <FMT>    Line format: json (default) or csv
///   -h, --help            Print help
///   -V, --version         Print version
/// ```
///
/// Exit code 0 on clean shutdown (ctrl-c), 1 on any fatal error. All
/// diagnostics go to stderr so stdout stays a clean record stream.
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;
use wtail_decoder::TailCursor;
use wtail_driver::{DriverConfig, OutputFormat, Sink};

mod watcher;

#[derive(Parser)]
#[command(name = "wtail", version, about = "Stream login accounting records as they are written")]
struct Cli {
    /// Record file to tail, e.g. /var/log/wtmp.
    #[arg(short, long)]
    input: PathBuf,

    /// Append rendered lines to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replay records already in the file before streaming new ones.
    #[arg(short = 's', long)]
    from_start: bool,

    /// Line rendering.
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Self::Json,
            Format::Csv => Self::Csv,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Subscribe before reading the file length so a write landing
    // between open and subscribe cannot be missed silently.
    let (_watcher, wake_rx) =
        watcher::watch(&cli.input).context("watch subscription failed")?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("ctrl-c received, shutting down");
            let _ = shutdown_tx.send(true);
        }
    });

    let mut cursor = TailCursor::open(&cli.input, !cli.from_start, wake_rx, shutdown_rx)
        .await
        .context("cannot tail input file")?;
    let mut sink = Sink::open(cli.output.as_deref())
        .await
        .context("cannot open output sink")?;

    tracing::info!(
        input = %cli.input.display(),
        from_start = cli.from_start,
        "tailing"
    );

    let config = DriverConfig {
        format: cli.format.into(),
        replay: cli.from_start,
    };
    wtail_driver::run(&mut cursor, config, &mut sink)
        .await
        .context("tail stream failed")?;

    Ok(())
}
