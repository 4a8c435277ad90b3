pub mod concept;
pub mod style_entry;

pub use concept::ConceptState;
pub use style_entry::{StyleDraft, StyleEntry};
