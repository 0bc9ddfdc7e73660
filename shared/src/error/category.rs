//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Dataset loading errors (1xxx)
    Dataset,
    /// Kitchen board errors (2xxx)
    Kitchen,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Dataset,
            2000..3000 => Self::Kitchen,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Dataset => "dataset",
            Self::Kitchen => "kitchen",
            Self::System => "system",
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_ranges() {
        assert_eq!(ErrorCategory::from_code(2), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1003), ErrorCategory::Dataset);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Kitchen);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
    }

    #[test]
    fn test_from_error_code() {
        assert_eq!(
            ErrorCategory::from(ErrorCode::PartyNotFound),
            ErrorCategory::Kitchen
        );
        assert_eq!(ErrorCategory::from(ErrorCode::ConfigError).name(), "system");
    }
}
