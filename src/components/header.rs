use crate::components::ModelDropdown;
use crate::utils::ModelRegistry;
use dioxus::prelude::*;

#[component]
pub fn Header(
    registry: Signal<ModelRegistry>,
    on_model_pick: EventHandler<String>,
) -> Element {
    rsx! {
        header {
            class: "flex items-center justify-between border-b border-gray-600 p-4 w-full",

            h1 {
                class: "text-2xl font-bold",
                "How can I help?"
            }

            ModelDropdown {
                registry,
                on_select: on_model_pick,
            }
        }
    }
}
