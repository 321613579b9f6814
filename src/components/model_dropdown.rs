use crate::utils::ModelRegistry;
use dioxus::prelude::*;

/// Dropdown over the fetched model options. Picking an option closes the menu
/// and hands the id to the coordinator; clicking anywhere else closes it via
/// the toggle's focus loss. The registry itself is only read here.
#[component]
pub fn ModelDropdown(
    registry: Signal<ModelRegistry>,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let (options, selected_id, selected_label) = {
        let registry = registry.read();
        (
            registry.models().to_vec(),
            registry.selected().map(|m| m.id.clone()),
            registry.selected().map(|m| m.label.clone()),
        )
    };

    let button_label = selected_label.unwrap_or_else(|| "Select an option".to_string());

    let toggle_open = move |_| {
        let current = *open.read();
        open.set(!current);
    };

    rsx! {
        div {
            class: "relative inline-block text-left",

            button {
                r#type: "button",
                onclick: toggle_open,
                // Clicking elsewhere drops focus from the toggle, which
                // closes the open menu.
                onfocusout: move |_| open.set(false),
                class: "inline-flex justify-center rounded-md border border-gray-600 px-4 py-2 bg-gray-700 text-sm font-medium hover:bg-gray-600",

                "{button_label}"
                span { class: "ml-2", "▾" }
            }

            if *open.read() {
                div {
                    class: "absolute right-0 mt-2 w-56 rounded-md shadow-lg bg-gray-700 z-10",
                    div {
                        class: "py-1",

                        if options.is_empty() {
                            p {
                                class: "px-4 py-2 text-sm text-gray-400",
                                "No AI models found"
                            }
                        } else {
                            for option in options.iter() {
                                {
                                    let option_id = option.id.clone();
                                    let is_selected = selected_id.as_deref() == Some(option.id.as_str());

                                    rsx! {
                                        button {
                                            key: "{option.id}",
                                            // Mousedown fires before the
                                            // toggle's focusout, so picking
                                            // an option beats the close.
                                            onmousedown: move |_| {
                                                open.set(false);
                                                on_select.call(option_id.clone());
                                            },
                                            class: if is_selected {
                                                "block w-full text-left px-4 py-2 text-sm bg-gray-600"
                                            } else {
                                                "block w-full text-left px-4 py-2 text-sm hover:bg-gray-600"
                                            },
                                            "{option.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
