//! Log line formatting
//!
//! Timestamped, level-tagged lines in the `[LEVEL] [timestamp] message`
//! shape used across the service.

use chrono::Local;

/// Log severity tag
#[derive(Debug, Clone, Copy)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Format a log line with the current local timestamp
pub fn line(level: Level, message: &str) -> String {
    format!(
        "[{}] [{}] {message}",
        level.tag(),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Format the request line logged for every inbound request
pub fn request_line(method: &str, path: &str) -> String {
    line(Level::Info, &format!("{method} {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_carries_level_and_message() {
        let formatted = line(Level::Warn, "something odd");
        assert!(formatted.starts_with("[WARN] ["));
        assert!(formatted.ends_with("] something odd"));
    }

    #[test]
    fn test_request_line() {
        let formatted = request_line("GET", "/questions/1");
        assert!(formatted.starts_with("[INFO] ["));
        assert!(formatted.ends_with("] GET /questions/1"));
    }
}
