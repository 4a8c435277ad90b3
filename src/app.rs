use dioxus::prelude::*;

use crate::components::{ActivityLog, AddStyleModal, PreviewPanel, StylePicker};
use crate::models::ConceptState;
use crate::services::{LogEntry, StyleCatalog};
use crate::style::APP_STYLE;

#[component]
#[allow(non_snake_case)]
pub fn App() -> Element {
    let catalog = use_signal(StyleCatalog::default);
    let selected_id = use_signal(|| Option::<String>::None);
    let show_add_modal = use_signal(|| false);
    let concept = use_signal(ConceptState::default);
    let logs = use_signal(Vec::<LogEntry>::new);

    rsx! {
        style { {APP_STYLE} }
        div { class: "app",
            header {
                div { class: "branding",
                    div { class: "title", "Style Atlas" }
                    div { class: "subtitle", "A reference library of UI design styles." }
                }
            }
            main {
                div { class: "sidebar",
                    StylePicker {
                        catalog: catalog.clone(),
                        selected_id: selected_id.clone(),
                        show_add_modal: show_add_modal.clone(),
                        concept: concept.clone(),
                        logs: logs.clone(),
                    }
                    ActivityLog { logs: logs.clone() }
                }
                div { class: "content",
                    PreviewPanel {
                        catalog: catalog.clone(),
                        selected_id: selected_id.clone(),
                        concept: concept.clone(),
                        logs: logs.clone(),
                    }
                }
            }
            if *show_add_modal.read() {
                AddStyleModal {
                    catalog: catalog.clone(),
                    selected_id: selected_id.clone(),
                    open: show_add_modal.clone(),
                    concept: concept.clone(),
                    logs: logs.clone(),
                }
            }
        }
    }
}
