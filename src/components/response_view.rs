use crate::utils::{ApiClient, RecordFetch};
use dioxus::prelude::*;

/// One history record by id. The coordinator keys this component by the
/// record id, so navigating to a different record remounts it and starts a
/// fresh fetch; the state below is terminal once resolved.
#[component]
pub fn ResponseView(record_id: String, client: ApiClient) -> Element {
    let mut fetch = use_signal(|| RecordFetch::Loading);

    // Fetch the record on component mount (run once)
    use_hook(|| {
        let client = client.clone();
        let id = record_id.clone();
        spawn(async move {
            let result = client.fetch_response(&id).await;
            fetch.set(RecordFetch::from_result(result));
        });
    });

    let state = fetch.read().clone();

    rsx! {
        div {
            class: "flex justify-center items-center container mx-auto",

            match state {
                RecordFetch::Loading => rsx! {
                    p { class: "text-lg text-gray-500", "Loading..." }
                },
                RecordFetch::NotFound => rsx! {
                    p { class: "text-lg text-gray-500", "Response not found" }
                },
                RecordFetch::Failed(message) => rsx! {
                    p { class: "text-lg text-red-500", "{message}" }
                },
                RecordFetch::Loaded(record) => rsx! {
                    div {
                        class: "p-6 rounded-lg shadow-md max-w-xl w-full",

                        h1 { class: "text-2xl mb-4", "System Message:" }
                        p { class: "text-lg mb-2", "{record.system_message}" }

                        h2 { class: "text-xl mb-4", "User Message:" }
                        p { class: "text-lg mb-2", "{record.user_message}" }

                        h3 { class: "text-lg mb-4", "Response:" }
                        p { class: "text-base text-gray-200", "{record.response}" }
                    }
                },
            }
        }
    }
}
