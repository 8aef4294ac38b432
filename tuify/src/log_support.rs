/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Tracing setup for programs that use the engine. The library itself only emits
//! events, a subscriber is installed by the binary (or a test).
//!
//! The console device is stdout, so logging to [`DisplayPreference::Stdout`] will draw
//! over the widgets. Interactive programs should log to a file and watch it with
//! `tail -f log.txt`.
//!
//! ```no_run
//! use glyphbox_tuify::{TracingConfig, WriterConfig, try_initialize_logging_global};
//!
//! let config = TracingConfig {
//!     level_filter: tracing_core::LevelFilter::DEBUG,
//!     writer_config: WriterConfig::File("log.txt".to_string()),
//! };
//! try_initialize_logging_global(config).unwrap();
//! tracing::debug!("logging to log.txt");
//! ```

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where logs go and how much is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// The `String` in [`WriterConfig::File`] and [`WriterConfig::DisplayAndFile`] is the
/// log file path, eg: `log.txt` or `/tmp/glyphbox.log`. The file is appended to, never
/// rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

/// Logs to [`DEFAULT_LOG_FILE_NAME`] at the given level.
impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a global subscriber. It can only be installed once per process, later calls
/// return an error.
///
/// Does nothing when the level filter is [`LevelFilter::OFF`] or the writer config is
/// [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be opened or a global subscriber is already
/// set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let tracing_config: TracingConfig = options.into();
    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Install a subscriber for the current thread only, until the guard is dropped.
/// Handy in tests.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let tracing_config: TracingConfig = options.into();
    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(None);
    };
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// The level filter followed by a display layer and a file layer, whichever the writer
/// config asks for. [None] if logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    if level_filter == LevelFilter::OFF || tracing_config.writer_config == WriterConfig::None {
        return Ok(None);
    }

    let mut layers: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];
    if let Some(layer) = create_display_layer(level_filter, &tracing_config.writer_config) {
        layers.push(layer);
    }
    if let Some(layer) = try_create_file_layer(level_filter, &tracing_config.writer_config)? {
        layers.push(layer);
    }
    Ok(Some(layers))
}

pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().compact();
    match writer_config {
        WriterConfig::Display(display_pref) | WriterConfig::DisplayAndFile(display_pref, _) => {
            match display_pref {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                )),
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// # Errors
///
/// Returns an error if the log file path has no file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::File(file_path) | WriterConfig::DisplayAndFile(_, file_path) => {
            let file_appender = try_create_file_appender(file_path)?;
            Ok(Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_filter(level_filter),
            )))
        }
        WriterConfig::None | WriterConfig::Display(_) => Ok(None),
    }
}

/// A file appender that never rotates. A bare file name is created in the current
/// directory.
///
/// # Errors
///
/// Returns an error if `file_path` has no file name component.
pub fn try_create_file_appender(
    file_path: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(file_path);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't use {} as a log file, it has no file name.", path.display())
    })?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn temp_log_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glyphbox_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn level_filter_converts_to_file_logging() {
        let config: TracingConfig = LevelFilter::TRACE.into();
        assert_eq!(config.get_level_filter(), LevelFilter::TRACE);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let config: TracingConfig = tracing::Level::WARN.into();
        assert_eq!(config.level_filter, LevelFilter::WARN);
    }

    #[test]
    fn constructors_log_at_debug() {
        let config = TracingConfig::new_file(None);
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let config = TracingConfig::new_display(DisplayPreference::Stderr);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        let layers = try_create_layers(&config).unwrap().unwrap();
        // Level filter, display.
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn disabled_configs_create_no_layers() {
        let off = TracingConfig {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
        };
        assert!(try_create_layers(&off).unwrap().is_none());

        let none: TracingConfig = WriterConfig::None.into();
        assert!(try_create_layers(&none).unwrap().is_none());
    }

    #[test]
    fn display_layer() {
        let layer: Option<Box<DynLayer<Registry>>> = create_display_layer(
            LevelFilter::DEBUG,
            &WriterConfig::Display(DisplayPreference::Stderr),
        );
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<Registry>>> =
            create_display_layer(LevelFilter::DEBUG, &WriterConfig::File("x.log".into()));
        assert!(layer.is_none());
    }

    #[test]
    fn file_layer_creates_the_file() {
        let file_path = temp_log_file("file_layer.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &WriterConfig::File(file_path.clone()))
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn display_and_file_creates_both_layers() {
        let file_path = temp_log_file("both_layers.log");
        let config = TracingConfig {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                file_path.to_str().unwrap().to_string(),
            ),
        };

        let layers = try_create_layers(&config).unwrap().unwrap();
        // Level filter, display, file.
        assert_eq!(layers.len(), 3);
    }

    #[test]
    fn file_path_without_a_name_is_an_error() {
        assert!(try_create_file_appender("/").is_err());
    }

    #[serial]
    #[test]
    fn thread_local_subscriber_writes_to_file() {
        let file_path = temp_log_file("thread_local.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        {
            let _guard = try_initialize_logging_thread_local(TracingConfig {
                level_filter: LevelFilter::INFO,
                writer_config: WriterConfig::File(file_path_str),
            })
            .unwrap();
            tracing::info!("written");
            tracing::debug!("filtered out");
        }

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("written"));
        assert!(!contents.contains("filtered out"));
    }
}
