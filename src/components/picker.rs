use dioxus::prelude::*;

use crate::models::ConceptState;
use crate::services::{LogEntry, LogLevel, StyleCatalog, push_log};

#[component]
#[allow(non_snake_case)]
pub fn StylePicker(
    catalog: Signal<StyleCatalog>,
    selected_id: Signal<Option<String>>,
    show_add_modal: Signal<bool>,
    concept: Signal<ConceptState>,
    logs: Signal<Vec<LogEntry>>,
) -> Element {
    let options: Vec<(String, String)> = catalog
        .read()
        .list()
        .iter()
        .map(|entry| (entry.id.clone(), entry.category.clone()))
        .collect();
    let selected_value = { selected_id.read().clone().unwrap_or_default() };

    let select_catalog = catalog.clone();
    let select_logs = logs.clone();
    let mut select_binding = selected_id.clone();
    let mut select_concept = concept.clone();
    let mut modal_binding = show_add_modal.clone();

    rsx! {
        div { class: "panel",
            h2 { "Select UI style" }
            p { "Pick a category to see its breakdown, or add a custom style of your own." }
            select {
                value: selected_value.clone(),
                oninput: move |evt| {
                    let id = evt.value();
                    if id.is_empty() {
                        return;
                    }
                    // A new selection discards any previously generated concept.
                    select_concept.set(ConceptState::Idle);
                    select_binding.set(Some(id.clone()));
                    if let Some(entry) = select_catalog.read().find(&id) {
                        push_log(select_logs, LogLevel::Info, format!("Selected {}", entry.category));
                    }
                },
                option {
                    value: "",
                    disabled: true,
                    selected: selected_value.is_empty(),
                    "-- choose a style --"
                }
                for (id, category) in options {
                    option { value: id.clone(), selected: selected_value == id, "{category}" }
                }
            }
            button {
                title: "Append a new style to the catalog",
                onclick: move |_| modal_binding.set(true),
                "Add style"
            }
        }
    }
}
