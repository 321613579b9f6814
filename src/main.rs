use dioxus::prelude::*;
use tracing::warn;

mod components;
mod utils;

use components::{Header, PromptForm, ResponseView, Sidebar};
use utils::{ApiClient, AppView, ModelRegistry, PromptController, Settings};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Backend origin comes from the settings file, with a logged fallback to
    // the compiled-in default.
    let client = use_hook(|| {
        let settings = Settings::load().unwrap_or_else(|e| {
            warn!("failed to load settings: {e}");
            Settings::default()
        });
        ApiClient::new(settings.api_base_url)
    });

    let client = match client {
        Ok(client) => client,
        Err(e) => {
            return rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center bg-gray-800 text-red-500",
                    p { "Failed to start: {e}" }
                }
            };
        }
    };

    // Current view state
    let mut view = use_signal(|| AppView::Prompt);

    // Prompt form state machine
    let mut prompt = use_signal(PromptController::new);

    // Model list and selection, mirroring the backend
    let mut registry = use_signal(ModelRegistry::default);

    // Bootstrap on mount: models first, then the backend's selection, so the
    // selected id can be resolved against the option list. Either step
    // failing leaves an empty list / no selection without blocking the page.
    {
        let client = client.clone();
        use_hook(move || {
            spawn(async move {
                match client.fetch_models().await {
                    Ok(models) => registry.write().set_models(models),
                    Err(e) => warn!("failed to fetch models: {e}"),
                }
                match client.fetch_selected_model().await {
                    Ok(selected) => registry.write().resolve_selected(selected.as_deref()),
                    Err(e) => warn!("failed to fetch selected model: {e}"),
                }
            });
        });
    }

    // Handler for submitting the prompt form. The controller refuses to hand
    // out a second snapshot while one submission is in flight, so rapid
    // clicks issue a single request.
    let submit_client = client.clone();
    let on_submit = move |_| {
        let Some(request) = prompt.write().begin_submit() else {
            return;
        };
        let client = submit_client.clone();
        spawn(async move {
            let result = client.submit_prompt(&request).await;
            prompt.write().finish_submit(result);
        });
    };

    // Handler for picking a model: optimistic local update, rolled back if
    // the backend rejects the change.
    let pick_client = client.clone();
    let on_model_pick = move |model_id: String| {
        let previous = registry.read().selected().cloned();
        if !registry.write().select(&model_id) {
            return;
        }
        let client = pick_client.clone();
        spawn(async move {
            if let Err(e) = client.select_model(&model_id).await {
                warn!("failed to select model {model_id}: {e}");
                registry.write().restore(previous);
            }
        });
    };

    // Handler for returning to the prompt view
    let on_new_prompt = move |_| view.set(AppView::Prompt);

    // Handler for opening a history record
    let on_select_record = move |id: String| view.set(AppView::Record(id));

    let (last_error, last_response) = {
        let prompt = prompt.read();
        (
            prompt.last_error().map(|e| e.to_string()),
            prompt.last_response().map(|r| r.content.clone()),
        )
    };

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        div {
            class: "flex flex-col min-h-screen h-screen bg-gray-800 text-white",

            Header {
                registry,
                on_model_pick,
            }

            div {
                class: "flex flex-1 min-h-0",

                Sidebar {
                    client: client.clone(),
                    on_new_prompt,
                    on_select_record,
                }

                main {
                    class: "flex-1 overflow-y-auto",

                    match view.read().clone() {
                        AppView::Prompt => rsx! {
                            div {
                                class: "w-full container mx-auto max-w-md p-4",

                                PromptForm {
                                    prompt,
                                    on_submit,
                                }

                                div {
                                    class: "text-center",

                                    h2 { class: "text-2xl mb-2", "Output:" }

                                    if let Some(error) = &last_error {
                                        p { class: "text-red-500 mb-2", "{error}" }
                                    }

                                    // A failed submission leaves the previous
                                    // output in place under the error.
                                    if let Some(content) = &last_response {
                                        p { "{content}" }
                                    }
                                }
                            }
                        },
                        AppView::Record(id) => rsx! {
                            // Keyed by id so navigating between records
                            // remounts the view and refetches.
                            ResponseView {
                                key: "{id}",
                                record_id: id.clone(),
                                client: client.clone(),
                            }
                        },
                    }
                }
            }
        }
    }
}
