use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinta_theme::PairLevel;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Why a preview or save request was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("Invalid data")]
    InvalidData { details: Vec<FieldError> },

    #[error("Insufficient contrast between primary and secondary colors")]
    InsufficientPairContrast { contrast: f64, level: PairLevel },

    #[error("Theme does not meet accessibility requirements")]
    AccessibilityRequirements {
        pass_rate: u8,
        failing: usize,
        total: usize,
    },
}

impl Rejection {
    /// HTTP status a server should answer with.
    pub fn status(&self) -> u16 {
        400
    }

    pub fn body(&self) -> ErrorBody {
        let details = match self {
            Rejection::InvalidData { details } => RejectionDetails::Fields(details.clone()),
            Rejection::InsufficientPairContrast { contrast, level } => RejectionDetails::Pair {
                contrast: *contrast,
                level: *level,
                recommendation: "Choose colors with more contrast for better accessibility"
                    .to_string(),
            },
            Rejection::AccessibilityRequirements {
                pass_rate,
                failing,
                total,
            } => RejectionDetails::Audit {
                pass_rate: *pass_rate,
                failing: *failing,
                total: *total,
                recommendation: "Adjust the colors to improve contrast".to_string(),
            },
        };

        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

/// JSON error body: `{"error": ..., "details": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: RejectionDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RejectionDetails {
    Fields(Vec<FieldError>),
    #[serde(rename_all = "camelCase")]
    Pair {
        contrast: f64,
        level: PairLevel,
        recommendation: String,
    },
    #[serde(rename_all = "camelCase")]
    Audit {
        pass_rate: u8,
        failing: usize,
        total: usize,
        recommendation: String,
    },
}
