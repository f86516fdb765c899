//! Logging setup for unistyle with stderr output and an optional log file.
//!
//! Console logs go to stderr so styled output on stdout can be piped. They are
//! enabled when `UNISTYLE_LOG` or `RUST_LOG` is set. A log file is written only
//! when a path is given (`--log-file` or `UNISTYLE_LOG_FILE`).
//!
//! ## Environment Variables
//!
//! 1. **`UNISTYLE_LOG`** (highest priority) - unistyle-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn` globally, `info` for unistyle crates

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every crate the short `UNISTYLE_LOG=<level>` form applies to.
const CRATES: &[&str] = &[
    "unistyle",
    "unistyle_bin",
    "unistyle_config",
    "unistyle_glyph",
    "unistyle_style",
    "unistyle_text_transform",
];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging.
///
/// Filters follow the priority described in the module docs:
/// [`UNISTYLE_LOG`] > [`RUST_LOG`] > default settings.
///
/// The returned [`LogGuard`] must be held for the lifetime of the program --
/// dropping it flushes and stops the background file writer.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let log_file = config
        .log_file_path
        .or_else(|| env::var_os("UNISTYLE_LOG_FILE").map(PathBuf::from));

    let (file_layer, file_guard) = match &log_file {
        Some(path) => {
            let (dir, filename) = split_log_path(path);
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::never(dir, filename);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(create_file_filter()?);
            (Some(layer), Some(guard))
        },
        None => (None, None),
    };

    let stderr_enabled = env::var("UNISTYLE_LOG").is_ok() || env::var("RUST_LOG").is_ok();
    let stderr_layer = if stderr_enabled {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(create_filter()?),
        )
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    if let Some(path) = &log_file {
        tracing::debug!("logging to {}", path.display());
    }

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file,
    })
}

/// Initialize logging for tests.
///
/// Writes to the test harness's captured output. Will not crash if called
/// multiple times or if logging is already initialized by another test.
pub fn test() {
    let _ = test_init();
}

fn test_init() -> Result<(), BoxError> {
    let filter = create_filter()?;
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()?;
    Ok(())
}

/// A path with an extension is a file; anything else is a directory that gets
/// a per-process file name.
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let default_name = format!("unistyle-{}.log", std::process::id());
    if path.extension().is_none() {
        return (path.to_path_buf(), default_name);
    }
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(default_name);
    (dir.to_path_buf(), name)
}

/// File filter: uses user-specified level if set, otherwise `info` for unistyle crates.
fn create_file_filter() -> Result<EnvFilter, BoxError> {
    if env::var("UNISTYLE_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return create_filter();
    }
    Ok(EnvFilter::new(expand_level("info")))
}

/// Create the [`EnvFilter`] for the current environment.
///
/// Priority: [`UNISTYLE_LOG`] > [`RUST_LOG`] > defaults.
fn create_filter() -> Result<EnvFilter, BoxError> {
    if let Ok(unistyle_log) = env::var("UNISTYLE_LOG") {
        return Ok(expand_unistyle_log(&unistyle_log));
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return Ok(EnvFilter::try_new(rust_log)?);
    }

    Ok(EnvFilter::new(expand_level("info")))
}

/// Expand [`UNISTYLE_LOG`] values into full tracing filter strings.
///
/// - `UNISTYLE_LOG=debug` becomes `warn,unistyle=debug,unistyle_bin=debug,...`
/// - `UNISTYLE_LOG=unistyle_glyph=trace` is used as-is (advanced syntax)
fn expand_unistyle_log(unistyle_log: &str) -> EnvFilter {
    if is_directive_list(unistyle_log) {
        return EnvFilter::new(unistyle_log);
    }
    EnvFilter::new(expand_level(unistyle_log))
}

fn is_directive_list(value: &str) -> bool {
    value.contains('=') || value.contains(':') || value.contains(',')
}

fn expand_level(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_bare_level() {
        let expanded = expand_level("debug");
        assert!(expanded.starts_with("warn,"));
        assert!(expanded.contains("unistyle_text_transform=debug"));
        assert!(expanded.contains("unistyle_glyph=debug"));
    }

    #[test]
    fn detects_directive_lists() {
        assert!(is_directive_list("unistyle_glyph=trace"));
        assert!(is_directive_list("warn,unistyle=debug"));
        assert!(!is_directive_list("trace"));
    }

    #[test]
    fn file_path_with_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.log");
        let (dir, name) = split_log_path(&path);
        assert_eq!(dir, tmp.path());
        assert_eq!(name, "run.log");
    }

    #[test]
    fn directory_path_gets_process_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let (dir, name) = split_log_path(tmp.path());
        assert_eq!(dir, tmp.path());
        assert_eq!(name, format!("unistyle-{}.log", std::process::id()));
    }

    #[test]
    fn bare_file_name_lands_in_current_dir() {
        let (dir, name) = split_log_path(Path::new("unistyle.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "unistyle.log");
    }

    #[test]
    fn test_init_is_repeatable() {
        test();
        test();
    }
}
