//! Application logging.
//!
//! Every message ends up in an in-memory ring shown by the logs dialog. When
//! logging is enabled in the configuration the same lines are appended to a
//! log file in the platform data directory. Both outputs hang off a single
//! `fern` dispatch, so `logging.level` filters [`Logger::log`] calls and the
//! `log` facade macros alike once [`Logger::install`] has run.

use anyhow::{Context, Result};
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// Upper bound of in-memory entries kept for the logs dialog
const MAX_LOG_ENTRIES: usize = 2000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    dispatch: Arc<dyn Log>,
    level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// In-memory only logger that keeps every level
    pub fn new() -> Self {
        Self::with_level(LevelFilter::Trace)
    }

    /// In-memory only logger filtered at `level`
    pub fn with_level(level: LevelFilter) -> Self {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let dispatch = Self::build_dispatch(level, &logs);
        Self::assemble(logs, dispatch, level, None)
    }

    /// Build a logger from the `[logging]` section
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config.level_filter();
        if config.enabled {
            let path = Self::get_log_file_path()?;
            Self::with_file(path, level)
        } else {
            Ok(Self::with_level(level))
        }
    }

    /// Logger that also appends to the given file
    pub fn with_file<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let logs = Arc::new(Mutex::new(Vec::new()));
        let dispatch = Self::build_dispatch(level, &logs).chain(file);
        Ok(Self::assemble(logs, dispatch, level, Some(path.to_path_buf())))
    }

    fn build_dispatch(level: LevelFilter, logs: &Arc<Mutex<Vec<String>>>) -> fern::Dispatch {
        let ring = Arc::clone(logs);
        fern::Dispatch::new()
            .format(|out, message, _record| {
                out.finish(format_args!("[{}] {}", Local::now().format("%H:%M:%S%.3f"), message))
            })
            .level(level)
            .chain(fern::Output::call(move |record| {
                if let Ok(mut logs) = ring.lock() {
                    if logs.len() >= MAX_LOG_ENTRIES {
                        logs.remove(0);
                    }
                    logs.push(record.args().to_string());
                }
            }))
    }

    fn assemble(
        logs: Arc<Mutex<Vec<String>>>,
        dispatch: fern::Dispatch,
        level: LevelFilter,
        log_file: Option<PathBuf>,
    ) -> Self {
        let (_, dispatch) = dispatch.into_log();
        Self {
            logs,
            dispatch: Arc::from(dispatch),
            level,
            log_file,
        }
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("studentdesk").join("studentdesk.log"))
    }

    /// Whether lines are also written to a log file
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Route `log::info!` and friends into this logger.
    ///
    /// Can only succeed once per process since it installs the global logger.
    pub fn install(&self) -> Result<()> {
        log::set_boxed_logger(Box::new(self.clone())).context("Failed to install global logger")?;
        log::set_max_level(self.level);
        Ok(())
    }

    /// Add an info-level log entry
    pub fn log(&self, message: String) {
        self.dispatch.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(Level::Info)
                .target(module_path!())
                .build(),
        );
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.dispatch.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.dispatch.log(record);
    }

    fn flush(&self) {
        self.dispatch.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
