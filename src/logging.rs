//! Logging module
//!
//! Structured logging setup built on tracing, with the log facade bridged in

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter, Layer};

/// Global logging initialization state
#[derive(Debug, Default)]
struct GlobalLoggingState {
    /// Whether setup has run
    initialized: bool,
    /// Result of the first setup attempt
    init_error: Option<String>,
}

static GLOBAL_LOGGING_STATE: OnceLock<Mutex<GlobalLoggingState>> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level
    pub level: LevelFilter,
    /// Optional log file path
    pub file_path: Option<PathBuf>,
    /// Whether to log to the console
    pub console: bool,
    /// Whether to emit JSON lines
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file_path: None,
            console: true,
            json_format: false,
        }
    }
}

/// Logging system
pub struct LoggingSystem;

impl LoggingSystem {
    /// Initialize logging once for the whole process
    ///
    /// Safe to call repeatedly; later calls are no-ops that report the
    /// outcome of the first one.
    pub fn setup_logging(config: LogConfig) -> anyhow::Result<Self> {
        let state_mutex =
            GLOBAL_LOGGING_STATE.get_or_init(|| Mutex::new(GlobalLoggingState::default()));

        {
            let state = state_mutex.lock().unwrap();
            if state.initialized {
                return match &state.init_error {
                    None => Ok(Self),
                    Some(e) => Err(anyhow::anyhow!("logging setup previously failed: {}", e)),
                };
            }
        }

        let init_result = Self::perform_initialization(&config);

        {
            let mut state = state_mutex.lock().unwrap();
            state.initialized = true;
            state.init_error = init_result.as_ref().err().map(|e| e.to_string());
        }

        init_result.map(|()| Self)
    }

    fn perform_initialization(config: &LogConfig) -> anyhow::Result<()> {
        Self::init_log_tracer()?;
        Self::init_tracing_subscriber(config)?;
        Ok(())
    }

    /// Bridge the log facade into tracing
    fn init_log_tracer() -> anyhow::Result<()> {
        use tracing_log::LogTracer;

        static LOG_TRACER_INIT: OnceLock<Result<(), String>> = OnceLock::new();

        let result = LOG_TRACER_INIT.get_or_init(|| LogTracer::init().map_err(|e| e.to_string()));

        result
            .as_ref()
            .map_err(|e| anyhow::anyhow!("LogTracer init failed: {}", e))?;
        Ok(())
    }

    fn init_tracing_subscriber(config: &LogConfig) -> anyhow::Result<()> {
        let env_filter = EnvFilter::from_default_env()
            .add_directive(Self::convert_level_to_directive(config.level));

        let fmt_layer = if config.json_format {
            fmt::layer()
                .json()
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .boxed()
        } else {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_ansi(true)
                .boxed()
        };

        let result = if config.console {
            registry().with(env_filter).with(fmt_layer).try_init()
        } else if let Some(file_path) = &config.file_path {
            let file = std::fs::File::create(file_path)
                .map_err(|e| anyhow::anyhow!("failed to create log file: {}", e))?;
            let file_layer = fmt::layer().with_writer(file).with_ansi(false);

            registry().with(env_filter).with(file_layer).try_init()
        } else {
            registry().with(env_filter).with(fmt_layer).try_init()
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                let error_msg = e.to_string();
                // A second init attempt in the same process is expected in tests
                if error_msg.contains("already been set")
                    || error_msg.contains("already initialized")
                {
                    tracing::debug!("logging already initialized");
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("tracing subscriber init failed: {}", error_msg))
                }
            }
        }
    }

    /// Convert a log::LevelFilter into a tracing directive
    fn convert_level_to_directive(level: LevelFilter) -> tracing_subscriber::filter::Directive {
        use tracing_subscriber::filter::Directive;
        match level {
            LevelFilter::Off => "off".parse().unwrap(),
            LevelFilter::Error => Directive::from(tracing::Level::ERROR),
            LevelFilter::Warn => Directive::from(tracing::Level::WARN),
            LevelFilter::Info => Directive::from(tracing::Level::INFO),
            LevelFilter::Debug => Directive::from(tracing::Level::DEBUG),
            LevelFilter::Trace => Directive::from(tracing::Level::TRACE),
        }
    }
}
