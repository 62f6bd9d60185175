use std::fmt;
use thiserror::Error;

/// 管道中發出請求的階段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Subject,
    Location,
    Film(usize),
    /// 整個 film 清單的合併結果
    Films,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Subject => write!(f, "subject"),
            Stage::Location => write!(f, "homeworld"),
            Stage::Film(index) => write!(f, "film #{}", index),
            Stage::Films => write!(f, "film list"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Decode,
    Configuration,
    Internal,
}

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fetching {stage} failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<AggregateError>,
    },

    #[error("Stream for {stage} completed without emitting a value")]
    EmptyStream { stage: Stage },

    #[error("Variants produced different results: {left} vs {right}")]
    VariantMismatch { left: String, right: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AggregateError {
    /// 將錯誤標記為發生在指定階段
    pub fn at(self, stage: Stage) -> Self {
        match self {
            already @ AggregateError::Stage { .. } => already,
            other => AggregateError::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    /// 失敗的階段（若有）
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AggregateError::Stage { stage, .. } | AggregateError::EmptyStream { stage } => {
                Some(*stage)
            }
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AggregateError::Stage { source, .. } => source.category(),
            AggregateError::Http { .. } | AggregateError::Status { .. } => ErrorCategory::Network,
            AggregateError::Decode { .. } | AggregateError::EmptyStream { .. } => {
                ErrorCategory::Decode
            }
            AggregateError::IoError(_)
            | AggregateError::ConfigError { .. }
            | AggregateError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AggregateError::VariantMismatch { .. } => ErrorCategory::Internal,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AggregateError::Stage { stage, source } => match source.as_ref() {
                AggregateError::Status { status, .. } => {
                    format!("The API rejected the {} request ({})", stage, status)
                }
                AggregateError::Http { .. } => {
                    format!("Could not reach the API while fetching the {}", stage)
                }
                AggregateError::Decode { .. } => {
                    format!("The API returned an unexpected {} payload", stage)
                }
                other => other.user_friendly_message(),
            },
            AggregateError::ConfigError { message } => format!("Configuration problem: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and that the API is reachable",
            ErrorCategory::Decode => "Verify that the root URL points to a people resource",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::Internal => "Run with --verbose and report the mismatching output",
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregateError>;
