//! Alert severity levels and their status-code parsing.

/// Severity of a user-facing alert or toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    /// Operation completed.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention but nothing failed.
    Warning,
    /// Operation failed.
    Error,
}

impl AlertLevel {
    /// Parse the status codes callers pass around (`"s"`/`"success"`,
    /// `"i"`/`"info"`, `"w"`/`"warning"`); anything else is an error.
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "s" | "success" => Self::Success,
            "i" | "info" => Self::Info,
            "w" | "warning" => Self::Warning,
            _ => Self::Error,
        }
    }

    /// CSS modifier / icon name for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_letters_and_words_case_insensitively() {
        assert_eq!(AlertLevel::parse("s"), AlertLevel::Success);
        assert_eq!(AlertLevel::parse("SUCCESS"), AlertLevel::Success);
        assert_eq!(AlertLevel::parse("i"), AlertLevel::Info);
        assert_eq!(AlertLevel::parse("W"), AlertLevel::Warning);
        assert_eq!(AlertLevel::parse("warning"), AlertLevel::Warning);
        assert_eq!(AlertLevel::parse("e"), AlertLevel::Error);
    }

    #[test]
    fn unknown_codes_fall_back_to_error() {
        assert_eq!(AlertLevel::parse(""), AlertLevel::Error);
        assert_eq!(AlertLevel::parse("fatal"), AlertLevel::Error);
    }

    #[test]
    fn css_names_are_stable() {
        assert_eq!(AlertLevel::Success.as_str(), "success");
        assert_eq!(AlertLevel::Error.as_str(), "error");
    }
}
