//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Writer that is either the log file or stderr (when the file is gone or
/// a clone fails mid-run).
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct SinkMaker(Option<fs::File>);

impl<'a> MakeWriter<'a> for SinkMaker {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match &self.0 {
            Some(f) => f.try_clone().map(LogSink::File).unwrap_or(LogSink::Stderr),
            None => LogSink::Stderr,
        }
    }
}

/// Initialize tracing to `~/.local/state/lastpost/lastpost.log`, falling
/// back to stderr when the state dir is unavailable.
///
/// `debug` (the config toggle) widens the default filter to debug-level
/// engine events; a `RUST_LOG` setting still overrides it.
pub fn init(debug: bool) -> Result<()> {
    let file = open_log_file().ok();
    let to_stderr = file.is_none();

    let fallback = if debug { "info,lastpost=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(BoxMakeWriter::new(SinkMaker(file)))
        .with_ansi(false)
        .init();

    if to_stderr {
        tracing::warn!("log dir unavailable, logging to stderr");
    } else {
        tracing::info!("lastpost logging initialized");
    }
    Ok(())
}

fn open_log_file() -> Result<fs::File> {
    let dir = xdg::BaseDirectories::with_prefix("lastpost")?.get_state_home();
    fs::create_dir_all(&dir)?;
    let path = dir.join("lastpost.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
