use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-50",
            div { class: "text-center px-6",
                h1 { class: "text-9xl font-bold text-gray-300 mb-4", "404" }
                h2 { class: "text-3xl font-bold text-gray-800 mb-4", "Página não encontrada" }
                p { class: "text-lg text-gray-600 mb-8", "O endereço /{path} não existe." }
                Link {
                    to: Route::Dashboard {},
                    class: "inline-block bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded-lg transition-colors",
                    "Voltar ao Dashboard"
                }
            }
        }
    }
}
