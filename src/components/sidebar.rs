use crate::utils::{ApiClient, HistoryRecord};
use dioxus::prelude::*;
use tracing::warn;

/// Past prompt/response exchanges, fetched once when the sidebar mounts.
/// A fetch failure degrades to the empty view; submitting a prompt does not
/// refresh this list.
#[component]
pub fn Sidebar(
    client: ApiClient,
    on_new_prompt: EventHandler<()>,
    on_select_record: EventHandler<String>,
) -> Element {
    // None until the first fetch resolves
    let mut records = use_signal(|| None::<Vec<HistoryRecord>>);

    // Fetch history on component mount (run once)
    use_hook(|| {
        let client = client.clone();
        spawn(async move {
            let list = match client.fetch_responses().await {
                Ok(list) => list,
                Err(e) => {
                    warn!("failed to fetch history: {e}");
                    Vec::new()
                }
            };
            records.set(Some(list));
        });
    });

    rsx! {
        aside {
            class: "h-full overflow-y-auto border-r border-gray-600 flex flex-col w-64 shrink-0",

            button {
                onclick: move |_| on_new_prompt.call(()),
                class: "w-full p-4 text-white text-left border-b border-gray-600 flex items-center",

                span {
                    class: "bg-gray-700 p-2 rounded-full h-8 w-8 flex items-center justify-center mr-4",
                    "+"
                }
                span { class: "truncate", "New Prompt" }
            }

            match &*records.read() {
                None => rsx! {
                    p {
                        class: "p-4 text-sm text-gray-400",
                        "Loading history..."
                    }
                },
                Some(list) if list.is_empty() => rsx! {
                    p {
                        class: "p-4 text-sm text-gray-400",
                        "No past responses"
                    }
                },
                Some(list) => rsx! {
                    for (index, record) in list.iter().enumerate() {
                        {
                            let record_id = record.id.clone();
                            let position = index + 1;

                            rsx! {
                                button {
                                    key: "{record.id}",
                                    onclick: move |_| on_select_record.call(record_id.clone()),
                                    class: "w-full p-4 text-white text-left border-b border-gray-600 flex items-center",

                                    span {
                                        class: "bg-gray-700 rounded-full h-8 w-8 flex items-center justify-center mr-4",
                                        "{position}"
                                    }
                                    div {
                                        class: "flex flex-col w-40",
                                        span { class: "truncate", "{record.user_message}" }
                                        span { class: "truncate text-gray-400", "{record.system_message}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
