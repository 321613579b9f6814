use crate::utils::PromptController;
use dioxus::prelude::*;

/// Input pair plus submit button. Text edits go straight to the controller's
/// setters; the button is disabled while a submission is in flight.
#[component]
pub fn PromptForm(
    prompt: Signal<PromptController>,
    on_submit: EventHandler<()>,
) -> Element {
    let (system_text, user_message, is_submitting) = {
        let prompt = prompt.read();
        (
            prompt.system_text().to_string(),
            prompt.user_message().to_string(),
            prompt.is_submitting(),
        )
    };

    rsx! {
        div {
            class: "mb-4",

            label {
                class: "text-2xl block mb-2",
                "System Text:"
            }
            input {
                r#type: "text",
                value: "{system_text}",
                oninput: move |evt| prompt.write().set_system_text(evt.value()),
                class: "bg-neutral-700 w-full p-4 mb-4 text-white rounded border border-gray-300",
            }

            label {
                class: "text-2xl block mb-2",
                "User Message:"
            }
            input {
                r#type: "text",
                value: "{user_message}",
                oninput: move |evt| prompt.write().set_user_message(evt.value()),
                class: "bg-neutral-700 w-full p-4 mb-4 text-white rounded border border-gray-300 text-lg",
            }

            button {
                disabled: is_submitting,
                onclick: move |_| on_submit.call(()),
                class: "w-full bg-blue-500 disabled:opacity-50 disabled:cursor-not-allowed text-white p-2 rounded",

                if is_submitting {
                    "Submitting..."
                } else {
                    "Submit"
                }
            }
        }
    }
}
