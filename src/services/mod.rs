pub mod catalog;
pub mod clipboard;
pub mod gemini;
pub mod logging;

pub use catalog::StyleCatalog;
pub use gemini::{ConceptError, build_concept_prompt, generate_concept};
pub use logging::{LogEntry, LogLevel, push_log};
