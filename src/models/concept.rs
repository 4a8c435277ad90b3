/// Lifecycle of one concept-generation request. There is no queue and no
/// cancellation: the preview holds exactly one of these at a time and a new
/// request simply replaces the previous outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConceptState {
    #[default]
    Idle,
    Loading,
    Ready(String),
    Failed(String),
}

impl ConceptState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ConceptState::Loading)
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            ConceptState::Ready(url) => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ConceptState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        assert!(!ConceptState::Idle.is_loading());
        assert!(ConceptState::Loading.is_loading());
        let ready = ConceptState::Ready("data:image/png;base64,AAAA".into());
        assert_eq!(ready.image_url(), Some("data:image/png;base64,AAAA"));
        assert_eq!(ready.error_message(), None);
        let failed = ConceptState::Failed("no image data received".into());
        assert_eq!(failed.error_message(), Some("no image data received"));
        assert_eq!(failed.image_url(), None);
    }
}
