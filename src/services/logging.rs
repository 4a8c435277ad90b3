use dioxus::prelude::{Signal, WritableExt};
use time::OffsetDateTime;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: OffsetDateTime,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn timestamp_label(&self) -> String {
        self.timestamp
            .format(format_description!("[hour]:[minute]:[second]"))
            .unwrap_or_default()
    }
}

pub fn push_log(mut logs: Signal<Vec<LogEntry>>, level: LogLevel, message: impl Into<String>) {
    let entry = LogEntry::new(level, message);
    logs.write().push(entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_label_is_wall_clock_shaped() {
        let entry = LogEntry::new(LogLevel::Info, "selected Glassmorphism");
        let label = entry.timestamp_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
