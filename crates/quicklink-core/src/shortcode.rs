use crate::error::{CoreError, Result};
use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// The short code identifying a link entry.
///
/// The variant records where the code came from. Equality and hashing only
/// look at the textual code, so a custom `abc123` collides with a generated
/// `abc123`.
#[derive(Clone, Debug)]
pub enum ShortCode {
    /// A system-generated code (e.g. from a random generator).
    Generated(SmolStr),
    /// A user-provided custom code.
    Custom(SmolStr),
}

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 32;

impl ShortCode {
    /// Wraps a code produced by a generator.
    pub fn generated(code: impl Into<SmolStr>) -> Self {
        Self::Generated(code.into())
    }

    /// Creates a custom `ShortCode` after validating the input.
    ///
    /// Valid codes are 3-32 characters and contain only `[a-zA-Z0-9_-]`.
    pub fn new(code: impl Into<SmolStr>) -> Result<Self> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self::Custom(code))
    }

    /// Creates a custom `ShortCode` without validation.
    pub fn custom_unchecked(code: impl Into<SmolStr>) -> Self {
        Self::Custom(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            ShortCode::Generated(s) | ShortCode::Custom(s) => s.as_str(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ShortCode::Generated(_))
    }

    fn validate(code: &str) -> Result<()> {
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_');
        if let Some(bad) = code.chars().find(|&c| !allowed(c)) {
            return Err(CoreError::InvalidShortCode(format!(
                "{code:?} contains {bad:?}, only [A-Za-z0-9_-] is allowed"
            )));
        }

        // every remaining char is ASCII, so bytes == chars
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&code.len()) {
            return Err(CoreError::InvalidShortCode(format!(
                "{code:?} is {} chars long, expected {MIN_LENGTH} to {MAX_LENGTH}",
                code.len()
            )));
        }

        Ok(())
    }
}

impl PartialEq for ShortCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ShortCode {}

impl Hash for ShortCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
