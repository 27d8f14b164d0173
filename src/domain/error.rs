//! Domain error types.

/// Top-level error type for entrygauge.
#[derive(Debug, thiserror::Error)]
pub enum EntrygaugeError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no price data for {code}")]
    NoData { code: String },

    #[error("insufficient data: have {have} usable periods, need {need}")]
    InsufficientData { have: usize, need: usize },

    #[error("degenerate series: {signal} is constant across all eligible periods")]
    DegenerateSeries { signal: String },

    #[error("invalid price {value}: must be a positive number")]
    InvalidPrice { value: f64 },

    #[error("report rendering failed: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&EntrygaugeError> for std::process::ExitCode {
    fn from(err: &EntrygaugeError) -> Self {
        let code: u8 = match err {
            EntrygaugeError::Io(_) | EntrygaugeError::Render { .. } => 1,
            EntrygaugeError::ConfigParse { .. }
            | EntrygaugeError::ConfigMissing { .. }
            | EntrygaugeError::ConfigInvalid { .. } => 2,
            EntrygaugeError::Data { .. } | EntrygaugeError::NoData { .. } => 3,
            EntrygaugeError::InsufficientData { .. }
            | EntrygaugeError::DegenerateSeries { .. }
            | EntrygaugeError::InvalidPrice { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
