use thiserror::Error;

use crate::configuration::ConfigurationError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_ZERO_LEADING_COEFFICIENT: u8 = 2;
pub const EXIT_OUTPUT_FAILURE: u8 = 3;

/// 啟動時一次性檢查出的錯誤，發生時不會輸出任何資料列。
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("expected 4 arguments (a b c x), got {given}")]
    WrongArgumentCount { given: usize },
    #[error("a must not be zero!")]
    ZeroLeadingCoefficient,
    #[error("argument {name} is not a number: '{text}'")]
    MalformedNumber { name: &'static str, text: String },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError)
}

impl ArgumentError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ArgumentError::ZeroLeadingCoefficient => EXIT_ZERO_LEADING_COEFFICIENT,
            ArgumentError::WrongArgumentCount { .. }
            | ArgumentError::MalformedNumber { .. }
            | ArgumentError::Configuration(_) => EXIT_USAGE,
        }
    }

    /// 使用方式錯誤需附上呼叫說明。
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            ArgumentError::WrongArgumentCount { .. }
                | ArgumentError::MalformedNumber { .. }
        )
    }
}
