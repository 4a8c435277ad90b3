use dioxus::prelude::*;

use crate::models::{ConceptState, StyleDraft};
use crate::services::{LogEntry, LogLevel, StyleCatalog, push_log};

/// Modal form for appending a style entry to the catalog. Only the category
/// is required; submitting without one is a silent no-op that keeps the
/// modal open.
#[component]
#[allow(non_snake_case)]
pub fn AddStyleModal(
    catalog: Signal<StyleCatalog>,
    selected_id: Signal<Option<String>>,
    open: Signal<bool>,
    concept: Signal<ConceptState>,
    logs: Signal<Vec<LogEntry>>,
) -> Element {
    let category = use_signal(String::new);
    let keywords = use_signal(String::new);
    let colors = use_signal(String::new);
    let effects = use_signal(String::new);
    let image_url = use_signal(String::new);

    let category_value = { category.read().clone() };
    let keywords_value = { keywords.read().clone() };
    let colors_value = { colors.read().clone() };
    let effects_value = { effects.read().clone() };
    let image_value = { image_url.read().clone() };

    let mut category_binding = category.clone();
    let mut keywords_binding = keywords.clone();
    let mut colors_binding = colors.clone();
    let mut effects_binding = effects.clone();
    let mut image_binding = image_url.clone();

    let mut close_binding = open.clone();
    let mut cancel_binding = open.clone();

    let mut submit_category = category.clone();
    let mut submit_keywords = keywords.clone();
    let mut submit_colors = colors.clone();
    let mut submit_effects = effects.clone();
    let mut submit_image = image_url.clone();
    let mut submit_catalog = catalog.clone();
    let mut submit_selected = selected_id.clone();
    let mut submit_concept = concept.clone();
    let mut submit_open = open.clone();
    let submit_logs = logs.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "panel modal",
                div { class: "modal-header",
                    h2 { "Add a new style" }
                    button { class: "secondary",
                        onclick: move |_| close_binding.set(false),
                        "Close"
                    }
                }
                label {
                    "Category name (required)"
                    input {
                        value: category_value,
                        oninput: move |evt| category_binding.set(evt.value()),
                        placeholder: "e.g. Cyberpunk 2077",
                    }
                }
                label {
                    "Keywords"
                    textarea {
                        value: keywords_value,
                        oninput: move |evt| keywords_binding.set(evt.value()),
                        placeholder: "Neon, high tech, glitch effect...",
                    }
                }
                label {
                    "Color schemes"
                    input {
                        value: colors_value,
                        oninput: move |evt| colors_binding.set(evt.value()),
                        placeholder: "Neon Yellow, Black, Dark Grey...",
                    }
                }
                label {
                    "Effects & features"
                    textarea {
                        value: effects_value,
                        oninput: move |evt| effects_binding.set(evt.value()),
                        placeholder: "Glowing borders, futuristic fonts...",
                    }
                }
                label {
                    "Image URL (optional)"
                    input {
                        value: image_value,
                        oninput: move |evt| image_binding.set(evt.value()),
                        placeholder: "https://example.com/image.jpg",
                    }
                }
                div { class: "modal-actions",
                    button { class: "secondary",
                        onclick: move |_| cancel_binding.set(false),
                        "Cancel"
                    }
                    button {
                        onclick: move |_| {
                            let draft = StyleDraft {
                                category: submit_category.read().clone(),
                                keywords: submit_keywords.read().clone(),
                                colors: submit_colors.read().clone(),
                                effects: submit_effects.read().clone(),
                                image_url: submit_image.read().clone(),
                            };
                            let Some(entry) = submit_catalog.write().submit(draft) else {
                                // Missing category: keep the modal open, change nothing.
                                return;
                            };
                            submit_selected.set(Some(entry.id.clone()));
                            submit_concept.set(ConceptState::Idle);
                            push_log(
                                submit_logs,
                                LogLevel::Success,
                                format!("Added style {}", entry.category),
                            );
                            submit_category.set(String::new());
                            submit_keywords.set(String::new());
                            submit_colors.set(String::new());
                            submit_effects.set(String::new());
                            submit_image.set(String::new());
                            submit_open.set(false);
                        },
                        "Save style"
                    }
                }
            }
        }
    }
}
