use crate::error::Error;
use crate::Generator;
use quicklink_core::ShortCode;
use rand::Rng;

/// `[a-zA-Z0-9]`, 62 symbols.
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_LENGTH: usize = 6;

/// Draws fixed-length codes uniformly from an alphabet.
///
/// The default configuration produces 6 characters over [`ALPHANUMERIC`],
/// roughly 5.7e10 distinct codes.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
    alphabet: &'static [u8],
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet: ALPHANUMERIC,
        }
    }

    /// Creates a generator with a custom length and alphabet.
    ///
    /// Duplicate symbols in `alphabet` skew the distribution towards them.
    pub fn try_new(length: usize, alphabet: &'static [u8]) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::ZeroLength);
        }
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some(byte) = alphabet.iter().find(|b| !b.is_ascii()) {
            return Err(Error::NonAsciiAlphabet(*byte));
        }
        Ok(Self { length, alphabet })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &'static [u8] {
        self.alphabet
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())] as char)
            .collect();
        ShortCode::generated(code)
    }
}
