use std::io;
use std::path::PathBuf;

use magsnap_snap::SnapTuningError;
use thiserror::Error;

use crate::logging::LogFormat;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid tuning in {}: {source}", path.display())]
    InvalidTuning {
        path: PathBuf,
        #[source]
        source: SnapTuningError,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            Self::Io { .. } => 3,
            Self::Json { .. } => 4,
            Self::InvalidTuning { .. } => 5,
            Self::Output(_) | Self::Encode(_) => 1,
        }
    }

    /// Message printed on stderr before exiting with [`Self::exit_code`].
    #[must_use]
    pub fn report(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Text => self.to_string(),
            LogFormat::Json => serde_json::json!({
                "status": "error",
                "error": self.to_string(),
                "exit_code": self.exit_code(),
            })
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report_is_the_display_message() {
        let error = CliError::InvalidInput("trace is empty".to_string());
        assert_eq!(error.report(LogFormat::Text), "invalid input: trace is empty");
    }

    #[test]
    fn json_report_carries_exit_code() {
        let error = CliError::InvalidInput("trace is empty".to_string());
        let value: serde_json::Value =
            serde_json::from_str(&error.report(LogFormat::Json)).expect("json report");
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "invalid input: trace is empty");
        assert_eq!(value["exit_code"], 2);
    }
}
