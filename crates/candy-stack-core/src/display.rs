//! Status line shown next to the dispenser

/// How a status message is styled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// Drawn in black
    #[default]
    Normal,
    /// Drawn in red
    Error,
}

/// The result of the last command, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    message: Option<String>,
    tone: Tone,
}

impl DisplayState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a normal message
    pub fn set_result(&mut self, message: impl Into<String>) {
        self.set(message, Tone::Normal);
    }

    /// Show an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.set(message, Tone::Error);
    }

    pub fn set(&mut self, message: impl Into<String>, tone: Tone) {
        self.message = Some(message.into());
        self.tone = tone;
    }

    /// Hide the status line
    pub fn reset(&mut self) {
        self.message = None;
        self.tone = Tone::Normal;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut display = DisplayState::new();
        assert_eq!(display.message(), None);

        display.set_error("boom");
        assert_eq!(display.message(), Some("boom"));
        assert_eq!(display.tone(), Tone::Error);

        display.set_result("fine");
        assert_eq!(display.tone(), Tone::Normal);

        display.reset();
        assert_eq!(display.message(), None);
    }
}
