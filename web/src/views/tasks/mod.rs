use crate::components::{Header, LoadingSpinner, NoticeBanner, TaskForm};
use crate::store::use_store;
use dioxus::prelude::*;

mod components;

#[component]
pub fn Tasks() -> Element {
    let store = use_store();

    // Users are fetched alongside tasks because the form's assignment
    // checklist lists them.
    use_effect(move || {
        spawn(async move {
            store.refresh_all().await;
        });
    });

    let users = store.users();
    let tasks = store.tasks();
    let editor = store.task_editor();

    rsx! {
        Header {}
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-4xl mx-auto px-6 space-y-6",
                NoticeBanner {}

                div { class: "flex justify-between items-center",
                    div {
                        h1 { class: "text-3xl font-bold text-gray-900", "Tarefas" }
                        p { class: "text-gray-600 mt-1", "Gerencie as tarefas cadastradas" }
                    }
                    button {
                        class: "bg-blue-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-blue-700 transition-colors",
                        onclick: move |_| store.open_task_editor(None),
                        "Nova Tarefa"
                    }
                }

                if store.loading() && tasks.is_empty() {
                    LoadingSpinner { message: "Carregando tarefas...".to_string() }
                } else if tasks.is_empty() {
                    components::EmptyTasksState { on_create: move |_| store.open_task_editor(None) }
                } else {
                    components::TaskList { tasks: tasks.clone() }
                }
            }
        }

        if editor.is_open() {
            TaskForm {
                task: editor.current().cloned(),
                users: users,
                on_submit: move |task| {
                    spawn(async move {
                        store.save_task(task).await;
                    });
                },
                on_cancel: move |_| store.close_task_editor(),
            }
        }
    }
}
