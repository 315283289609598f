//! Singleton.
//!
//! Two process-wide values behind `OnceLock`: a file-appending [`Logger`]
//! and a mutable [`AppConfig`]. First access constructs exactly once, even
//! under concurrent first-touch; every access yields the same `&'static`
//! reference.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

pub const DEFAULT_LOG_PATH: &str = "app.log";

static LOGGER: OnceLock<Logger> = OnceLock::new();
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Append-only file logger. A failed open degrades to a no-op sink so
/// logging never takes the process down.
pub struct Logger {
    sink: Mutex<Option<File>>,
}

impl Logger {
    fn open(path: &Path) -> Self {
        let sink = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("Failed to open log file {}: {err}", path.display());
                None
            }
        };
        Logger {
            sink: Mutex::new(sink),
        }
    }

    /// The process-wide logger, opening [`DEFAULT_LOG_PATH`] on first touch.
    pub fn global() -> &'static Logger {
        LOGGER.get_or_init(|| Logger::open(Path::new(DEFAULT_LOG_PATH)))
    }

    /// Initialises the global logger at `path`. The first initialisation
    /// wins; later calls (and `global()`) return the existing instance.
    pub fn init_with_path(path: &Path) -> &'static Logger {
        LOGGER.get_or_init(|| Logger::open(path))
    }

    pub fn log(&self, message: &str) {
        let mut sink = lock_recovering(&self.sink);
        if let Some(file) = sink.as_mut() {
            // Write failures degrade to no-op, same as a failed open.
            if writeln!(file, "[LOG] {message}").and_then(|_| file.flush()).is_err() {
                *sink = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        lock_recovering(&self.sink).is_some()
    }
}

/// Process-wide configuration. Construction is atomic; fields stay
/// mutable afterwards and readers observe the last write.
pub struct AppConfig {
    connection_string: Mutex<String>,
}

impl AppConfig {
    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| AppConfig {
            connection_string: Mutex::new("database://localhost:5432".to_string()),
        })
    }

    pub fn connection_string(&self) -> String {
        lock_recovering(&self.connection_string).clone()
    }

    pub fn set_connection_string(&self, value: &str) {
        *lock_recovering(&self.connection_string) = value.to_string();
    }
}

// A poisoned lock still holds valid data for these value-only payloads.
fn lock_recovering<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
