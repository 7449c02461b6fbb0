use thiserror::Error;

/// Errors returned when configuring a generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("code length must be at least 1")]
    ZeroLength,
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("alphabet must be ascii, found byte {0:#04x}")]
    NonAsciiAlphabet(u8),
}
