use super::*;
use crate::components::DeleteConfirmButton;
use crate::store::PendingDelete;
use cadastro_core::{Task, TaskStatus};

/// Component displayed when no tasks are registered yet
#[component]
pub fn EmptyTasksState(on_create: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow text-center py-12",
            div { class: "text-6xl mb-4", "📋" }
            h2 { class: "text-2xl font-semibold text-gray-900 mb-2", "Nenhuma tarefa cadastrada" }
            p { class: "text-gray-600 mb-6", "Comece adicionando sua primeira tarefa." }
            button {
                class: "bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-blue-700 transition-colors",
                onclick: move |_| on_create.call(()),
                "Nova Tarefa"
            }
        }
    }
}

#[component]
pub fn TaskList(tasks: Vec<Task>) -> Element {
    rsx! {
        div { class: "space-y-4",
            for task in tasks.iter() {
                TaskCard { key: "{task.id.unwrap_or_default()}", task: task.clone() }
            }
        }
    }
}

/// Single task row with status badge, assigned users and actions
#[component]
fn TaskCard(task: Task) -> Element {
    let store = use_store();
    let edit_target = task.clone();

    let badge = match task.status {
        TaskStatus::Pendente => "bg-yellow-100 text-yellow-800",
        TaskStatus::EmAndamento => "bg-blue-100 text-blue-800",
        TaskStatus::Finalizado => "bg-green-100 text-green-800",
    };
    let icon = match task.status {
        TaskStatus::Pendente => "⏳",
        TaskStatus::EmAndamento => "🔄",
        TaskStatus::Finalizado => "✅",
    };
    let created = task.data_criacao.format("%d/%m/%Y %H:%M").to_string();
    let assigned = task.assigned_users();

    rsx! {
        div { class: "bg-white rounded-lg shadow p-6 hover:shadow-md transition-shadow",
            div { class: "flex items-start justify-between",
                div { class: "flex-1",
                    div { class: "flex items-center space-x-3 mb-2",
                        span { "{icon}" }
                        h3 { class: "text-lg font-semibold text-gray-900", "{task.nome}" }
                        span { class: "px-2 py-1 rounded-full text-xs font-medium {badge}", "{task.status}" }
                    }
                    p { class: "text-gray-600 mb-3", "{task.descricao}" }
                    div { class: "text-sm text-gray-500", "Criado em: {created}" }
                    if !assigned.is_empty() {
                        div { class: "flex flex-wrap gap-1 mt-2",
                            for user in assigned.iter() {
                                span {
                                    key: "{user.id.unwrap_or_default()}",
                                    class: "inline-flex items-center px-2 py-1 rounded-full text-xs bg-blue-100 text-blue-800",
                                    "{user.nome}"
                                }
                            }
                        }
                    }
                }
                if let Some(id) = task.id {
                    div { class: "flex items-center space-x-2 ml-4",
                        button {
                            class: "p-2 text-gray-400 hover:text-blue-600 hover:bg-blue-50 rounded-lg transition-colors",
                            title: "Editar",
                            onclick: move |_| store.open_task_editor(Some(edit_target.clone())),
                            "✏️"
                        }
                        DeleteConfirmButton {
                            armed: store.pending_delete() == Some(PendingDelete::Task(id)),
                            on_arm: move |_| store.request_delete_task(id),
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
