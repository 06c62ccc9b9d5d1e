use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown actor state byte {0}")]
    InvalidState(u8),
    #[error("week event register {index} out of range (have {len})")]
    WeekEventOutOfRange { index: usize, len: usize },
    #[error("debug register {index} out of range (have {len})")]
    DebugRegisterOutOfRange { index: usize, len: usize },
}
