//! Activity log of order attempts and their outcome.
//!
//! Every line goes to the console (stderr) and is appended to the log file,
//! formatted as `<timestamp> - <LEVEL> - <message>`.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Event formatter producing `2024-05-01 10:11:12,345 - INFO - message`.
struct ActivityFormat;

impl<S, N> FormatEvent<S, N> for ActivityFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format("%Y-%m-%d %H:%M:%S,%3f"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logging context of one run.
///
/// Created at program start, handed to the order client by reference and
/// closed at the end. Nothing is installed globally: events are routed to
/// this context's own dispatcher.
pub struct ActivityLog {
    dispatch: Dispatch,
    file: Option<Arc<File>>,
}

impl ActivityLog {
    /// Log to stderr and append to `path`, creating it if needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = Arc::new(OpenOptions::new().create(true).append(true).open(path)?);
        let mut log = Self::with_writers(io::stderr, Arc::clone(&file));
        log.file = Some(file);
        Ok(log)
    }

    /// Build a context writing to arbitrary sinks.
    pub fn with_writers<C, F>(console: C, file: F) -> Self
    where
        C: for<'w> MakeWriter<'w> + Send + Sync + 'static,
        F: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(ActivityFormat)
                    .with_ansi(false)
                    .with_writer(console),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .event_format(ActivityFormat)
                    .with_ansi(false)
                    .with_writer(file),
            );

        Self {
            dispatch: Dispatch::new(subscriber),
            file: None,
        }
    }

    pub fn info(&self, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::info!("{}", message));
    }

    pub fn error(&self, message: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::error!("{}", message));
    }

    /// Flush the log file to disk and release it.
    pub fn close(self) -> io::Result<()> {
        match &self.file {
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
    }
}
