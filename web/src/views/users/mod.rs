use crate::components::{Header, LoadingSpinner, NoticeBanner, UserForm};
use crate::store::use_store;
use dioxus::prelude::*;

mod components;

#[component]
pub fn Users() -> Element {
    let store = use_store();

    // Tasks are fetched alongside users because the form's assignment select
    // lists them.
    use_effect(move || {
        spawn(async move {
            store.refresh_all().await;
        });
    });

    let users = store.users();
    let tasks = store.tasks();
    let editor = store.user_editor();

    rsx! {
        Header {}
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-4xl mx-auto px-6 space-y-6",
                NoticeBanner {}

                div { class: "flex justify-between items-center",
                    div {
                        h1 { class: "text-3xl font-bold text-gray-900", "Usuários" }
                        p { class: "text-gray-600 mt-1", "Gerencie os usuários cadastrados" }
                    }
                    button {
                        class: "bg-blue-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-blue-700 transition-colors",
                        onclick: move |_| store.open_user_editor(None),
                        "Novo Usuário"
                    }
                }

                if store.loading() && users.is_empty() {
                    LoadingSpinner { message: "Carregando usuários...".to_string() }
                } else if users.is_empty() {
                    components::EmptyUsersState { on_create: move |_| store.open_user_editor(None) }
                } else {
                    components::UserList { users: users.clone() }
                }
            }
        }

        if editor.is_open() {
            UserForm {
                user: editor.current().cloned(),
                tasks: tasks,
                on_submit: move |user| {
                    spawn(async move {
                        store.save_user(user).await;
                    });
                },
                on_cancel: move |_| store.close_user_editor(),
            }
        }
    }
}
