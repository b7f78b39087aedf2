//! Profile handle validation.
//!
//! A handle is 1–39 ASCII letters or digits, optionally split by single
//! hyphens. Leading, trailing and consecutive hyphens are rejected.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::CoreError;

/// Longest handle the platform accepts.
pub const MAX_HANDLE_LEN: usize = 39;

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$").expect("valid handle regex")
});

/// Returns `true` when `value` matches the handle grammar exactly.
///
/// No trimming happens here; callers that accept user input should go
/// through [`Handle::parse`].
#[must_use]
pub fn is_valid_handle(value: &str) -> bool {
    !value.is_empty() && value.len() <= MAX_HANDLE_LEN && HANDLE_RE.is_match(value)
}

/// A handle that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Trims surrounding whitespace and validates the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidHandle`] if the trimmed input does not
    /// match the handle grammar.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        if is_valid_handle(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(CoreError::InvalidHandle(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
