use cadastro_core::{DATETIME_LOCAL_FORMAT, Task, TaskStatus, User, parse_timestamp};
use chrono::Local;
use dioxus::prelude::*;

/// Modal form for creating or editing a task.
///
/// New drafts default to status Pendente and the current date-time; `users`
/// feeds the assignment checklist.
#[component]
pub fn TaskForm(
    task: Option<Task>,
    users: Vec<User>,
    on_submit: EventHandler<Task>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = task.is_some();
    let original_id = task.as_ref().and_then(|task| task.id);
    let (nome, descricao, status, data_criacao, selected) = match &task {
        Some(task) => (
            task.nome.clone(),
            task.descricao.clone(),
            task.status,
            task.data_criacao.format(DATETIME_LOCAL_FORMAT).to_string(),
            task.assigned_users()
                .iter()
                .filter_map(|user| user.id)
                .collect::<Vec<i64>>(),
        ),
        None => (
            String::new(),
            String::new(),
            TaskStatus::default(),
            Local::now()
                .naive_local()
                .format(DATETIME_LOCAL_FORMAT)
                .to_string(),
            Vec::new(),
        ),
    };

    let mut nome = use_signal(move || nome);
    let mut descricao = use_signal(move || descricao);
    let mut status = use_signal(move || status);
    let mut data_criacao = use_signal(move || data_criacao);
    let mut selected_users = use_signal(move || selected);
    let mut error = use_signal(|| None::<String>);

    let users_for_submit = users.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let nome_value = nome().trim().to_string();
        let descricao_value = descricao().trim().to_string();
        if nome_value.is_empty() || descricao_value.is_empty() {
            error.set(Some("Preencha o nome e a descrição da tarefa.".to_string()));
            return;
        }

        let data_value = match parse_timestamp(data_criacao().trim()) {
            Ok(parsed) => parsed,
            Err(_) => {
                error.set(Some("Informe uma data de criação válida.".to_string()));
                return;
            }
        };

        let selected = selected_users();
        let assigned: Vec<User> = users_for_submit
            .iter()
            .filter(|user| user.id.is_some_and(|id| selected.contains(&id)))
            .cloned()
            .collect();

        error.set(None);
        on_submit.call(Task {
            id: original_id,
            nome: nome_value,
            descricao: descricao_value,
            status: status(),
            data_criacao: data_value,
            user: Some(assigned),
        });
    };

    let title = if editing { "Editar Tarefa" } else { "Nova Tarefa" };
    let submit_label = if editing { "Atualizar" } else { "Cadastrar" };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-xl shadow-xl max-w-md w-full max-h-[90vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex items-center justify-between p-6 border-b border-gray-200",
                    h2 { class: "text-xl font-semibold text-gray-900", "{title}" }
                    button {
                        class: "text-gray-400 hover:text-gray-600 transition-colors",
                        onclick: move |_| on_cancel.call(()),
                        "✕"
                    }
                }

                form { class: "p-6 space-y-4", onsubmit: handle_submit,
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Nome da Tarefa *" }
                        input {
                            r#type: "text",
                            placeholder: "Digite o nome da tarefa",
                            value: "{nome}",
                            oninput: move |evt| nome.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Descrição *" }
                        textarea {
                            rows: 3,
                            placeholder: "Descreva a tarefa",
                            value: "{descricao}",
                            oninput: move |evt| descricao.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent resize-none",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Status *" }
                        select {
                            value: "{status().wire_name()}",
                            onchange: move |evt| {
                                if let Ok(parsed) = evt.value().parse() {
                                    status.set(parsed);
                                }
                            },
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                            for option_status in TaskStatus::ALL {
                                option {
                                    key: "{option_status.wire_name()}",
                                    value: "{option_status.wire_name()}",
                                    "{option_status}"
                                }
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Data de Criação *" }
                        input {
                            r#type: "datetime-local",
                            value: "{data_criacao}",
                            oninput: move |evt| data_criacao.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Usuários Associados" }
                        div { class: "max-h-32 overflow-y-auto border border-gray-300 rounded-lg p-2 space-y-1",
                            if users.is_empty() {
                                p { class: "text-sm text-gray-500 text-center py-2", "Nenhum usuário cadastrado" }
                            } else {
                                for user in users.iter() {
                                    if let Some(id) = user.id {
                                        label {
                                            key: "{id}",
                                            class: "flex items-center space-x-2 cursor-pointer hover:bg-gray-50 p-1 rounded",
                                            input {
                                                r#type: "checkbox",
                                                checked: selected_users().contains(&id),
                                                onchange: move |_| {
                                                    let mut selected = selected_users.write();
                                                    if let Some(position) =
                                                        selected.iter().position(|existing| *existing == id)
                                                    {
                                                        selected.remove(position);
                                                    } else {
                                                        selected.push(id);
                                                    }
                                                },
                                                class: "rounded border-gray-300 text-blue-600 focus:ring-blue-500",
                                            }
                                            span { class: "text-sm text-gray-700", "{user.nome}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(message) = error() {
                        div { class: "text-red-600 text-sm", "{message}" }
                    }

                    div { class: "flex gap-3 pt-4",
                        button {
                            r#type: "submit",
                            class: "flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                            "{submit_label}"
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            class: "px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                            "Cancelar"
                        }
                    }
                }
            }
        }
    }
}
