use crate::store::use_store;
use dioxus::prelude::*;

/// Banner surfacing the store's current notice, dismissible by the user.
#[component]
pub fn NoticeBanner() -> Element {
    let store = use_store();
    let Some(notice) = store.notice() else {
        return rsx! {
            div {}
        };
    };

    let (container, text) = if notice.is_error() {
        ("bg-red-50 border border-red-200", "text-red-600")
    } else {
        ("bg-green-50 border border-green-200", "text-green-700")
    };

    rsx! {
        div { class: "{container} rounded-lg p-4 flex justify-between items-center",
            p { class: "{text} text-sm", "{notice.message()}" }
            button {
                class: "text-gray-400 hover:text-gray-600 transition-colors ml-4",
                onclick: move |_| store.dismiss_notice(),
                "✕"
            }
        }
    }
}
