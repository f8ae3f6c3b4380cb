use crate::Route;
use dioxus::prelude::*;

/// Top navigation bar shared by every page.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "bg-white shadow-sm border-b border-gray-200",
            div { class: "max-w-6xl mx-auto px-6",
                div { class: "flex justify-between items-center h-16",
                    h1 { class: "text-2xl font-bold text-blue-600", "Sistema de Cadastro" }
                    nav { class: "flex space-x-4",
                        HeaderLink { to: Route::Dashboard {}, label: "Dashboard" }
                        HeaderLink { to: Route::Users {}, label: "Usuários" }
                        HeaderLink { to: Route::Tasks {}, label: "Tarefas" }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderLink(to: Route, label: String) -> Element {
    rsx! {
        Link {
            to,
            class: "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-blue-600 hover:bg-gray-50 transition-colors",
            active_class: "text-blue-600 bg-blue-50",
            "{label}"
        }
    }
}
