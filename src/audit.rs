//! Logging for the binary: the audit trail goes to its own file, and
//! everything else goes to the terminal.

use env_logger::{Builder, Env, Logger, Target, WriteStyle};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// The log target every audit trail record is sent to.
pub const TARGET: &str = "audit";

/// Sends audit records to the audit file, if there is one, and
/// diagnostics to stderr.
pub struct Split {
    audit: Option<Logger>,
    diagnostics: Logger,
}

impl Split {
    /// Return a logger that appends the audit trail to `path`, or drops
    /// it if `path` is `None`. Diagnostics follow `RUST_LOG`, defaulting to warnings.
    pub fn new(path: Option<&Path>) -> io::Result<Split> {
        let audit = match path {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;

                Some(
                    Builder::new()
                        .filter(Some(TARGET), LevelFilter::Info)
                        .write_style(WriteStyle::Never)
                        .target(Target::Pipe(Box::new(file)))
                        .build(),
                )
            }
            None => None,
        };

        let diagnostics = Builder::from_env(Env::default().default_filter_or("warn")).build();

        Ok(Split { audit, diagnostics })
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let max = self
            .audit
            .as_ref()
            .map_or(LevelFilter::Off, Logger::filter)
            .max(self.diagnostics.filter());

        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max);
        Ok(())
    }
}

impl Log for Split {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        if metadata.target() == TARGET {
            self.audit.as_ref().is_some_and(|audit| audit.enabled(metadata))
        } else {
            self.diagnostics.enabled(metadata)
        }
    }

    fn log(&self, record: &Record<'_>) {
        if record.target() == TARGET {
            if let Some(audit) = &self.audit {
                audit.log(record);
            }
        } else {
            self.diagnostics.log(record);
        }
    }

    fn flush(&self) {
        if let Some(audit) = &self.audit {
            audit.flush();
        }
        self.diagnostics.flush();
    }
}
