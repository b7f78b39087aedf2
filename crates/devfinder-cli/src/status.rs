//! The single status line shared by every failure path.

/// Wording for a handle that fails validation.
pub const INVALID_HANDLE_MESSAGE: &str = "Invalid username";

/// Holds at most one message. Reporting replaces; nothing clears it except
/// an explicit [`StatusRegion::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    message: Option<String>,
}

impl StatusRegion {
    pub fn report(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
