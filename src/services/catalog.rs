use uuid::Uuid;

use crate::models::{StyleDraft, StyleEntry};

/// In-memory, append-only collection of style entries for one session.
///
/// The catalog is owned by the `App` component inside a `Signal` and mutated
/// only from UI event handlers, so it carries no locking of its own.
pub struct StyleCatalog {
    entries: Vec<StyleEntry>,
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::with_seed_styles()
    }
}

impl StyleCatalog {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_seed_styles() -> Self {
        Self {
            entries: seed_styles(),
        }
    }

    /// Store a draft under a fresh session-unique id and return the full
    /// entry. UUIDs rather than wall-clock time, so rapid successive adds
    /// cannot collide.
    pub fn add(&mut self, draft: StyleDraft) -> StyleEntry {
        let entry = draft.into_entry(format!("custom-{}", Uuid::new_v4()));
        self.entries.push(entry.clone());
        entry
    }

    /// Form-submit path: stores the draft only when it passes validation.
    /// An invalid draft leaves the catalog untouched and returns `None`.
    pub fn submit(&mut self, draft: StyleDraft) -> Option<StyleEntry> {
        if !draft.is_valid() {
            return None;
        }
        Some(self.add(draft))
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn seed(id: &str, category: &str, keywords: &str, colors: &str, effects: &str) -> StyleEntry {
    StyleEntry {
        id: id.into(),
        category: category.into(),
        keywords: keywords.into(),
        colors: colors.into(),
        effects: effects.into(),
        image_url: None,
    }
}

/// Built-in reference styles shown on first launch.
fn seed_styles() -> Vec<StyleEntry> {
    vec![
        seed(
            "glassmorphism",
            "Glassmorphism",
            "Frosted glass, translucency, depth",
            "Soft whites, vivid gradient accents",
            "Background blur, transparent layers, thin light borders",
        ),
        seed(
            "neumorphism",
            "Neumorphism",
            "Soft UI, extruded shapes, monochrome",
            "Muted greys, one pale accent",
            "Double shadows, embossed surfaces, subtle depth",
        ),
        seed(
            "cyberpunk",
            "Cyberpunk",
            "Neon, high tech, glitch effect",
            "Neon Yellow, Magenta, Black",
            "Glowing borders, scanlines, futuristic fonts",
        ),
        seed(
            "minimalism",
            "Minimalism",
            "Whitespace, clarity, restraint",
            "White, Black, one accent color",
            "Flat surfaces, generous spacing, crisp typography",
        ),
        seed(
            "brutalism",
            "Brutalism",
            "Raw, bold, unpolished",
            "Stark black on white, primary colors",
            "Hard edges, oversized type, visible grids",
        ),
        seed(
            "material",
            "Material Design",
            "Paper, elevation, motion",
            "Bold saturated hues",
            "Layered cards, ripple feedback, drop shadows",
        ),
        seed(
            "claymorphism",
            "Claymorphism",
            "Clay, playful, rounded",
            "Pastel pinks, lilacs, creams",
            "Inflated 3D shapes, inner shadows, large radii",
        ),
        seed(
            "vaporwave",
            "Vaporwave",
            "Retro, 80s, dreamy",
            "Hot pink, cyan, deep purple",
            "Gradient sunsets, chrome text, grid horizons",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn draft(category: &str) -> StyleDraft {
        StyleDraft {
            category: category.into(),
            keywords: "Neon, high tech".into(),
            colors: "Neon Yellow, Black".into(),
            effects: "Glowing borders".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let catalog = StyleCatalog::with_seed_styles();
        let ids: HashSet<&str> = catalog.list().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn add_assigns_unique_ids_across_rapid_inserts() {
        let mut catalog = StyleCatalog::empty();
        let mut ids = HashSet::new();
        for _ in 0..64 {
            let entry = catalog.add(draft("Cyberpunk 2077"));
            assert!(entry.id.starts_with("custom-"));
            assert!(ids.insert(entry.id), "id reused within a session");
        }
        assert_eq!(catalog.len(), 64);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut catalog = StyleCatalog::empty();
        let first = catalog.add(draft("First"));
        let second = catalog.add(draft("Second"));
        let categories: Vec<&str> = catalog.list().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["First", "Second"]);
        assert_eq!(catalog.list()[0].id, first.id);
        assert_eq!(catalog.list()[1].id, second.id);
    }

    #[test]
    fn find_resolves_known_ids_only() {
        let mut catalog = StyleCatalog::with_seed_styles();
        assert!(catalog.find("cyberpunk").is_some());
        assert!(catalog.find("missing").is_none());
        let entry = catalog.add(draft("Cyberpunk 2077"));
        assert_eq!(catalog.find(&entry.id), Some(&entry));
    }

    #[test]
    fn invalid_draft_never_reaches_the_catalog() {
        let mut catalog = StyleCatalog::with_seed_styles();
        let before = catalog.len();
        let rejected = catalog.submit(StyleDraft {
            category: String::new(),
            keywords: "orphaned".into(),
            colors: String::new(),
            effects: String::new(),
            image_url: String::new(),
        });
        assert_eq!(rejected, None);
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn submitted_draft_is_stored_and_selectable() {
        let mut catalog = StyleCatalog::with_seed_styles();
        let before = catalog.len();
        let entry = catalog
            .submit(StyleDraft {
                category: "Cyberpunk 2077".into(),
                keywords: "Neon, high tech".into(),
                colors: "Neon Yellow, Black".into(),
                effects: "Glowing borders".into(),
                image_url: String::new(),
            })
            .expect("valid draft");
        assert_eq!(catalog.len(), before + 1);

        // The entry the preview would show after auto-selection.
        let shown = catalog.find(&entry.id).expect("new entry resolvable");
        assert_eq!(shown.category, "Cyberpunk 2077");
        assert_eq!(shown.keyword_list(), vec!["Neon", "high tech"]);
    }

    #[test]
    fn added_draft_round_trips_unchanged() {
        let mut catalog = StyleCatalog::with_seed_styles();
        let before = catalog.len();
        let entry = catalog.add(draft("Cyberpunk 2077"));
        assert_eq!(catalog.len(), before + 1);

        let stored = catalog.find(&entry.id).expect("freshly added entry");
        assert_eq!(stored.category, "Cyberpunk 2077");
        assert_eq!(stored.keywords, "Neon, high tech");
        assert_eq!(stored.colors, "Neon Yellow, Black");
        assert_eq!(stored.effects, "Glowing borders");
        assert_eq!(stored.image_url, None);
        assert_eq!(stored.keyword_list(), vec!["Neon", "high tech"]);
    }
}
