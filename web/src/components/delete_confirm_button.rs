use dioxus::prelude::*;

/// Inline two-step delete confirmation.
///
/// Renders a delete button; once armed it shows an explicit confirm/cancel
/// pair. The armed state is owned by the caller, so at most one row is armed
/// at a time and a declined confirmation simply disarms.
#[component]
pub fn DeleteConfirmButton(
    armed: bool,
    on_arm: EventHandler<()>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    if !armed {
        return rsx! {
            button {
                class: "p-2 text-gray-400 hover:text-red-600 hover:bg-red-50 rounded-lg transition-colors",
                title: "Excluir",
                onclick: move |_| on_arm.call(()),
                "🗑"
            }
        };
    }

    rsx! {
        span { class: "flex items-center space-x-1 text-sm",
            span { class: "text-red-600 font-medium", "Excluir?" }
            button {
                class: "px-2 py-1 rounded bg-red-600 text-white hover:bg-red-700 transition-colors",
                onclick: move |_| on_confirm.call(()),
                "Sim"
            }
            button {
                class: "px-2 py-1 rounded border border-gray-300 text-gray-600 hover:bg-gray-50 transition-colors",
                onclick: move |_| on_cancel.call(()),
                "Não"
            }
        }
    }
}
