//! Diagnostics for the sample consumer. Outcomes themselves go to stdout; this only reports on
//! how the run went, tagging each line with the subcommand that produced it.

use std::{process::ExitCode, sync::Mutex};

use annotate_snippets::{Annotation, AnnotationType, Renderer, Snippet};
use log::{kv::Key, Level, LevelFilter, Log, Metadata, Record};
use outcome::result::Result;

use crate::verbosity::Verbosity;

static TALLY: Tally = Tally::new();

pub fn init(verbosity: Verbosity) -> Result<()> {
    let level = verbosity.into();
    log::set_boxed_logger(Box::new(Logger { level }))?;
    log::set_max_level(level);
    Ok(())
}

pub fn exit_code() -> ExitCode {
    ExitCode::from(TALLY.exit_status())
}

/// Count of problems reported so far.
#[derive(Debug)]
struct Tally {
    errors: Mutex<u32>,
    warnings: Mutex<u32>,
}

impl Tally {
    const fn new() -> Self {
        Self {
            errors: Mutex::new(0),
            warnings: Mutex::new(0),
        }
    }

    fn count(&self, level: Level) {
        let counter = match level {
            Level::Error => &self.errors,
            Level::Warn => &self.warnings,
            _ => return,
        };
        *counter.lock().expect("failed to lock tally") += 1;
    }

    fn exit_status(&self) -> u8 {
        let errors = *self.errors.lock().expect("failed to lock tally");
        let warnings = *self.warnings.lock().expect("failed to lock tally");
        if errors > 0 {
            u8::MAX
        } else if warnings > 0 {
            1
        } else {
            0
        }
    }
}

#[derive(Debug)]
struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    #[inline]
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{}", render(record));
        TALLY.count(record.level());
    }

    fn flush(&self) {}
}

fn render(record: &Record<'_>) -> String {
    let id = record
        .key_values()
        .get(Key::from_str("id"))
        .map(|v| v.to_string());
    let label = record.args().to_string();
    let snippet = Snippet {
        title: Some(Annotation {
            id: id.as_deref(),
            label: Some(&label),
            annotation_type: annotation_type_of(record.level()),
        }),
        footer: Vec::with_capacity(0),
        slices: Vec::with_capacity(0),
    };
    let renderer = if cfg!(test) {
        Renderer::plain()
    } else {
        Renderer::styled()
    };
    let rendered = renderer.render(snippet).to_string();
    rendered
}

fn annotation_type_of(level: Level) -> AnnotationType {
    match level {
        Level::Error => AnnotationType::Error,
        Level::Warn => AnnotationType::Warning,
        Level::Info => AnnotationType::Info,
        Level::Debug => AnnotationType::Help,
        Level::Trace => AnnotationType::Note,
    }
}
