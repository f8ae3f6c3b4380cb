use crate::components::{Header, NoticeBanner};
use crate::store::use_store;
use cadastro_core::{Task, TaskStats, TaskStatus, User, recent_tasks, recent_users};
use dioxus::prelude::*;

/// Entries shown in each recent-activity panel.
const RECENT_LIMIT: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let store = use_store();

    // Pull fresh collections on mount; the panels derive from whatever the
    // store currently holds while the request is in flight.
    use_effect(move || {
        spawn(async move {
            store.refresh_all().await;
        });
    });

    let users = store.users();
    let tasks = store.tasks();
    let stats = TaskStats::of(&tasks);
    let latest_tasks = recent_tasks(&tasks, RECENT_LIMIT);
    let latest_users = recent_users(&users, RECENT_LIMIT);

    rsx! {
        Header {}
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-6xl mx-auto px-6 space-y-8",
                NoticeBanner {}

                div {
                    h1 { class: "text-3xl font-bold text-gray-900", "Dashboard" }
                    p { class: "text-gray-600 mt-2", "Visão geral do sistema de cadastro" }
                }

                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    StatCard {
                        icon: "👥".to_string(),
                        label: "Total de Usuários".to_string(),
                        value: users.len(),
                    }
                    StatCard {
                        icon: "📋".to_string(),
                        label: "Total de Tarefas".to_string(),
                        value: stats.total,
                    }
                    StatCard {
                        icon: "⏳".to_string(),
                        label: "Pendentes".to_string(),
                        value: stats.pendente,
                    }
                    StatCard {
                        icon: "✅".to_string(),
                        label: "Finalizadas".to_string(),
                        value: stats.finalizado,
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
                    RecentTasks { tasks: latest_tasks }
                    RecentUsers { users: latest_users }
                }
            }
        }
    }
}

#[component]
fn StatCard(icon: String, label: String, value: usize) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-6",
            div { class: "flex items-center",
                div { class: "text-3xl", "{icon}" }
                div { class: "ml-4",
                    p { class: "text-sm font-medium text-gray-600", "{label}" }
                    p { class: "text-2xl font-bold text-gray-900", "{value}" }
                }
            }
        }
    }
}

#[component]
fn RecentTasks(tasks: Vec<Task>) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-6",
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Tarefas Recentes" }
            if tasks.is_empty() {
                p { class: "text-gray-500 text-center py-8", "Nenhuma tarefa cadastrada" }
            } else {
                div { class: "space-y-3",
                    for task in tasks.iter() {
                        RecentTaskRow { key: "{task.id.unwrap_or_default()}", task: task.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentTaskRow(task: Task) -> Element {
    let badge = match task.status {
        TaskStatus::Pendente => "bg-yellow-100 text-yellow-800",
        TaskStatus::EmAndamento => "bg-blue-100 text-blue-800",
        TaskStatus::Finalizado => "bg-green-100 text-green-800",
    };
    let created = task.data_criacao.format("%d/%m/%Y").to_string();

    rsx! {
        div { class: "flex items-center justify-between p-3 bg-gray-50 rounded-lg",
            div {
                p { class: "font-medium text-gray-900", "{task.nome}" }
                p { class: "text-sm text-gray-500", "{created}" }
            }
            span { class: "px-2 py-1 rounded-full text-xs font-medium {badge}", "{task.status}" }
        }
    }
}

#[component]
fn RecentUsers(users: Vec<User>) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-6",
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Usuários Recentes" }
            if users.is_empty() {
                p { class: "text-gray-500 text-center py-8", "Nenhum usuário cadastrado" }
            } else {
                div { class: "space-y-3",
                    for user in users.iter() {
                        RecentUserRow { key: "{user.id.unwrap_or_default()}", user: user.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentUserRow(user: User) -> Element {
    rsx! {
        div { class: "flex items-center justify-between p-3 bg-gray-50 rounded-lg",
            div {
                p { class: "font-medium text-gray-900", "{user.nome}" }
                p { class: "text-sm text-gray-500", "{user.email}" }
            }
            div { class: "text-right",
                p { class: "text-sm font-medium text-gray-900", "{user.idade} anos" }
                if user.tarefas.is_some() {
                    p { class: "text-xs text-gray-500", "Com tarefa" }
                }
            }
        }
    }
}
