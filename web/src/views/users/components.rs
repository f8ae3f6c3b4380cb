use super::*;
use crate::components::DeleteConfirmButton;
use crate::store::PendingDelete;
use cadastro_core::User;

/// Component displayed when no users are registered yet
#[component]
pub fn EmptyUsersState(on_create: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow text-center py-12",
            div { class: "text-6xl mb-4", "👤" }
            h2 { class: "text-2xl font-semibold text-gray-900 mb-2", "Nenhum usuário cadastrado" }
            p { class: "text-gray-600 mb-6", "Comece adicionando seu primeiro usuário." }
            button {
                class: "bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors",
                onclick: move |_| on_create.call(()),
                "Novo Usuário"
            }
        }
    }
}

#[component]
pub fn UserList(users: Vec<User>) -> Element {
    rsx! {
        div { class: "space-y-4",
            for user in users.iter() {
                UserCard { key: "{user.id.unwrap_or_default()}", user: user.clone() }
            }
        }
    }
}

/// Single user row with edit and delete actions
#[component]
fn UserCard(user: User) -> Element {
    let store = use_store();
    let edit_target = user.clone();

    rsx! {
        div { class: "bg-white rounded-lg shadow p-6 hover:shadow-md transition-shadow",
            div { class: "flex items-center justify-between",
                div { class: "flex-1",
                    h3 { class: "text-lg font-semibold text-gray-900", "{user.nome}" }
                    p { class: "text-sm text-gray-500", "{user.email}" }
                    div { class: "flex items-center space-x-4 text-sm text-gray-600 mt-2",
                        span { "{user.idade} anos" }
                        if let Some(tarefa) = &user.tarefas {
                            span { class: "flex items-center",
                                span { class: "w-2 h-2 bg-blue-500 rounded-full mr-2" }
                                "Tarefa: {tarefa.nome}"
                            }
                        }
                    }
                }
                if let Some(id) = user.id {
                    div { class: "flex items-center space-x-2",
                        button {
                            class: "p-2 text-gray-400 hover:text-blue-600 hover:bg-blue-50 rounded-lg transition-colors",
                            title: "Editar",
                            onclick: move |_| store.open_user_editor(Some(edit_target.clone())),
                            "✏️"
                        }
                        DeleteConfirmButton {
                            armed: store.pending_delete() == Some(PendingDelete::User(id)),
                            on_arm: move |_| store.request_delete_user(id),
                            on_confirm: move |_| {
                                spawn(async move {
                                    store.confirm_delete().await;
                                });
                            },
                            on_cancel: move |_| store.cancel_delete(),
                        }
                    }
                }
            }
        }
    }
}
