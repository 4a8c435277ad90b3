use serde::{Deserialize, Serialize};

/// One catalog record describing a named visual design style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub id: String,
    pub category: String,
    pub keywords: String,
    pub colors: String,
    pub effects: String,
    pub image_url: Option<String>,
}

impl StyleEntry {
    /// Split the comma-delimited keyword field into display tokens,
    /// trimming surrounding whitespace. Empty tokens are kept as-is.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords
            .split(',')
            .map(|keyword| keyword.trim().to_string())
            .collect()
    }

    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }

    /// Fixed-format text block written to the clipboard by the preview.
    pub fn summary(&self) -> String {
        let image = self
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or("N/A");
        format!(
            "Style: {}\n---\nKeywords: {}\nColors: {}\nEffects: {}\nImage: {}",
            self.category, self.keywords, self.colors, self.effects, image
        )
    }
}

/// Form output: a style entry without an identifier. The catalog assigns
/// the id when the draft is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDraft {
    pub category: String,
    pub keywords: String,
    pub colors: String,
    pub effects: String,
    pub image_url: String,
}

impl StyleDraft {
    /// Only the category is required; every other field is free text.
    pub fn is_valid(&self) -> bool {
        !self.category.is_empty()
    }

    pub fn into_entry(self, id: impl Into<String>) -> StyleEntry {
        StyleEntry {
            id: id.into(),
            category: self.category,
            keywords: self.keywords,
            colors: self.colors,
            effects: self.effects,
            image_url: if self.image_url.is_empty() {
                None
            } else {
                Some(self.image_url)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(keywords: &str, image_url: Option<&str>) -> StyleEntry {
        StyleEntry {
            id: "test".into(),
            category: "Cyberpunk 2077".into(),
            keywords: keywords.into(),
            colors: "Neon Yellow, Black".into(),
            effects: "Glowing borders".into(),
            image_url: image_url.map(Into::into),
        }
    }

    #[test]
    fn keyword_list_trims_each_token() {
        let entry = entry("Neon, high tech,  glitch ", None);
        assert_eq!(entry.keyword_list(), vec!["Neon", "high tech", "glitch"]);
    }

    #[test]
    fn keyword_list_keeps_empty_tokens() {
        // Splitting is deliberately naive: consecutive commas and an empty
        // field both surface empty tokens.
        let doubled = entry("a,,b", None);
        assert_eq!(doubled.keyword_list(), vec!["a", "", "b"]);
        let empty = entry("", None);
        assert_eq!(empty.keyword_list(), vec![""]);
    }

    #[test]
    fn summary_renders_placeholder_for_missing_image() {
        let entry = entry("Neon, high tech", None);
        assert_eq!(
            entry.summary(),
            "Style: Cyberpunk 2077\n---\nKeywords: Neon, high tech\nColors: Neon Yellow, Black\nEffects: Glowing borders\nImage: N/A"
        );
    }

    #[test]
    fn summary_includes_image_url_when_present() {
        let entry = entry("Neon", Some("https://example.com/shot.png"));
        let last_line = entry.summary().lines().last().map(str::to_string);
        assert_eq!(last_line.as_deref(), Some("Image: https://example.com/shot.png"));
    }

    #[test]
    fn draft_requires_a_category() {
        let mut draft = StyleDraft::default();
        assert!(!draft.is_valid());
        draft.category = "Glassmorphism".into();
        assert!(draft.is_valid());
    }

    #[test]
    fn empty_image_field_becomes_absent() {
        let draft = StyleDraft {
            category: "Cyberpunk 2077".into(),
            keywords: "Neon, high tech".into(),
            colors: "Neon Yellow, Black".into(),
            effects: "Glowing borders".into(),
            image_url: String::new(),
        };
        let entry = draft.into_entry("custom-1");
        assert_eq!(entry.image_url, None);
        assert!(!entry.has_image());
        assert!(entry.summary().ends_with("Image: N/A"));
    }
}
