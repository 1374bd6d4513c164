use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Installs the global subscriber writing to stdout. `RUST_LOG` overrides
/// the default `info` filter.
pub fn init(format: LogFormat) -> Result<(), SetGlobalDefaultError> {
    init_with_writer(format, std::io::stdout)
}

/// Same as [`init`] with a custom writer, e.g. `std::io::stderr` for tools
/// whose stdout is their output.
pub fn init_with_writer<W>(format: LogFormat, writer: W) -> Result<(), SetGlobalDefaultError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing::subscriber::set_global_default(subscriber(format, filter, writer))
}

fn subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn emit(format: LogFormat, filter: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(format, EnvFilter::new(filter), move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(path = "/debug", "debug event");
            tracing::info!(path = "/info", "info event");
        });

        captured.text()
    }

    #[test]
    fn filter_drops_events_below_level() {
        let output = emit(LogFormat::Text, "info");
        assert!(output.contains("info event"));
        assert!(!output.contains("debug event"));
    }

    #[test]
    fn filter_directive_enables_debug() {
        let output = emit(LogFormat::Text, "debug");
        assert!(output.contains("debug event"));
        assert!(output.contains("info event"));
    }

    #[test]
    fn json_format_emits_one_object_per_event() {
        let output = emit(LogFormat::Json, "info");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 1);

        let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["fields"]["message"], "info event");
        assert_eq!(event["fields"]["path"], "/info");
    }
}
