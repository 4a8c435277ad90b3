use std::time::Duration;

use dioxus::prelude::*;

use crate::models::ConceptState;
use crate::services::clipboard::copy_text;
use crate::services::{LogEntry, LogLevel, StyleCatalog, generate_concept, push_log};

const COPIED_BADGE_WINDOW: Duration = Duration::from_secs(2);

/// Read-only projection of the current selection: title, keyword badges,
/// palette and effects text, preview image, clipboard export, and the
/// Gemini concept area.
#[component]
#[allow(non_snake_case)]
pub fn PreviewPanel(
    catalog: Signal<StyleCatalog>,
    selected_id: Signal<Option<String>>,
    concept: Signal<ConceptState>,
    logs: Signal<Vec<LogEntry>>,
) -> Element {
    let copied = use_signal(|| false);
    let failed_image_src = use_signal(|| Option::<String>::None);

    let selected = {
        let catalog_ref = catalog.read();
        selected_id
            .read()
            .as_deref()
            .and_then(|id| catalog_ref.find(id))
            .cloned()
    };

    let Some(entry) = selected else {
        return rsx! {
            div { class: "panel placeholder",
                h2 { "Nothing selected" }
                p { "Pick a style from the list to see its full breakdown." }
            }
        };
    };

    let concept_value = { concept.read().clone() };
    let copied_value = *copied.read();
    let keyword_badges = entry.keyword_list();

    let entry_image = entry.image_url.clone().filter(|url| !url.is_empty());
    let image_failed = {
        let failed = failed_image_src.read();
        entry_image.is_some() && *failed == entry_image
    };
    let entry_image_for_error = entry_image.clone();
    let mut failed_binding = failed_image_src.clone();

    let copy_entry = entry.clone();
    let copy_logs = logs.clone();
    let copied_binding = copied.clone();

    let generate_entry = entry.clone();
    let generate_logs = logs.clone();
    let mut generate_state = concept.clone();
    let generating = concept_value.is_loading();

    let copy_label = if copied_value { "Copied" } else { "Copy" };
    let generate_label = if generating {
        "Generating..."
    } else {
        "Generate concept"
    };

    rsx! {
        div { class: "panel preview",
            div { class: "preview-header",
                h2 { "{entry.category}" }
                button { class: "secondary",
                    title: "Copy this style's summary to the clipboard",
                    onclick: move |_| {
                        let summary = copy_entry.summary();
                        let logs_task = copy_logs.clone();
                        let mut copied_task = copied_binding.clone();
                        spawn(async move {
                            match copy_text(&summary).await {
                                Ok(()) => {
                                    copied_task.set(true);
                                    push_log(logs_task, LogLevel::Info, "Copied style summary to clipboard");
                                    tokio::time::sleep(COPIED_BADGE_WINDOW).await;
                                    copied_task.set(false);
                                }
                                Err(err) => {
                                    push_log(logs_task, LogLevel::Error, format!("Clipboard write failed: {err}"));
                                }
                            }
                        });
                    },
                    "{copy_label}"
                }
            }
            section {
                h3 { "Keywords" }
                div { class: "badge-row",
                    for keyword in keyword_badges {
                        span { class: "badge", "{keyword}" }
                    }
                }
            }
            div { class: "detail-grid",
                section { class: "detail-card",
                    h3 { "Color schemes" }
                    p { "{entry.colors}" }
                }
                section { class: "detail-card",
                    h3 { "Effects & features" }
                    p { "{entry.effects}" }
                }
            }
            section {
                h3 { "Visual preview" }
                if let Some(src) = entry_image {
                    if image_failed {
                        div { class: "image-placeholder", "Could not load the preview image" }
                    } else {
                        img {
                            class: "preview-image",
                            src: "{src}",
                            alt: "{entry.category} preview",
                            onerror: move |_| failed_binding.set(entry_image_for_error.clone()),
                        }
                    }
                } else {
                    div { class: "image-placeholder", "No preview image yet" }
                }
            }
            section {
                h3 { "Generated concept" }
                p { "Ask Gemini to render a mockup matching this style's description." }
                button {
                    disabled: generating,
                    onclick: move |_| {
                        // No cancellation of in-flight calls; the disabled
                        // button is the only double-submit guard.
                        if generate_state.read().is_loading() {
                            return;
                        }
                        let entry = generate_entry.clone();
                        let logs_task = generate_logs.clone();
                        let mut state = generate_state.clone();
                        state.set(ConceptState::Loading);
                        spawn(async move {
                            match generate_concept(&entry).await {
                                Ok(url) => {
                                    push_log(
                                        logs_task,
                                        LogLevel::Success,
                                        format!("Concept image ready for {}", entry.category),
                                    );
                                    state.set(ConceptState::Ready(url));
                                }
                                Err(err) => {
                                    push_log(
                                        logs_task,
                                        LogLevel::Error,
                                        format!("Concept generation failed: {err}"),
                                    );
                                    state.set(ConceptState::Failed(err.to_string()));
                                }
                            }
                        });
                    },
                    "{generate_label}"
                }
                if generating {
                    div { class: "image-placeholder", "Rendering a mockup, this can take a moment..." }
                }
                if let Some(url) = concept_value.image_url() {
                    img { class: "preview-image", src: "{url}", alt: "Generated concept for {entry.category}" }
                }
                if let Some(message) = concept_value.error_message() {
                    p { class: "error-text", "{message}" }
                }
            }
        }
    }
}
