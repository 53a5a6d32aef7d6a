//! Logging setup for strand: file output plus optional stdout.
//!
//! Logs always go to a file; stdout logging kicks in when `STRAND_LOG` or
//! `RUST_LOG` is set, or in debug builds. Filter priority is `STRAND_LOG`
//! over `RUST_LOG` over the default (`warn` globally, `info` for the strand
//! crates).
//!
//! Default log file: `<data_local_dir>/strand/logs/strand-<pid>.log`,
//! overridable with `--log-file <path>`.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const DEFAULT_FILTER: &str = "warn,strand=info,strand_bin=info";

/// Returned from [`init`]; hold it for the life of the program so the
/// background file writer flushes on drop.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging. Safe to call when a subscriber is already installed;
/// the second installation simply fails without panicking.
pub fn init(config: LogConfig) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_enabled =
        env::var("STRAND_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);
    let stdout_layer = stdout_enabled.then(|| fmt::layer().with_filter(env_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

/// Stdout-only logging for tests. Will not crash when called repeatedly or
/// when another test already installed a subscriber.
pub fn test() {
    let _ = fmt().with_env_filter(env_filter()).try_init();
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("strand-{}.log", std::process::id());

    if let Some(path) = override_path {
        // A path with an extension names the file itself; a bare directory
        // gets the pid-stamped default filename.
        if path.extension().is_some() {
            let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("strand")
        .join("logs");
    (dir, filename)
}

/// File output stays at `warn` unless the user asked for more.
fn file_filter() -> EnvFilter {
    if env::var("STRAND_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return env_filter();
    }
    EnvFilter::new("warn")
}

/// `STRAND_LOG` > `RUST_LOG` > defaults. A bare level in `STRAND_LOG`
/// (e.g. `debug`) is expanded to the strand crate namespaces; advanced
/// per-module syntax is passed through untouched.
fn env_filter() -> EnvFilter {
    if let Ok(strand_log) = env::var("STRAND_LOG") {
        if strand_log.contains('=') || strand_log.contains(',') {
            return EnvFilter::new(strand_log);
        }
        return EnvFilter::new(format!(
            "warn,strand={strand_log},strand_bin={strand_log}"
        ));
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_pid_stamped_under_the_data_dir() {
        let (dir, name) = resolve_log_path(None);
        assert!(dir.ends_with("strand/logs"));
        assert!(name.starts_with("strand-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn override_with_extension_names_the_file() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/out/session.log")));
        assert_eq!(dir, PathBuf::from("/tmp/out"));
        assert_eq!(name, "session.log");
    }

    #[test]
    fn override_without_extension_is_a_directory() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/strand-logs")));
        assert_eq!(dir, PathBuf::from("/tmp/strand-logs"));
        assert!(name.starts_with("strand-"));
    }

    #[test]
    fn test_init_is_idempotent() {
        test();
        test();
    }
}
