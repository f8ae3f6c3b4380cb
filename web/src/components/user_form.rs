use cadastro_core::{Task, User};
use dioxus::prelude::*;

/// Modal form for creating or editing a user.
///
/// `user` pre-populates the draft when editing; `tasks` feeds the optional
/// task assignment select. Required-field validation happens here, so an
/// invalid draft never reaches the API client.
#[component]
pub fn UserForm(
    user: Option<User>,
    tasks: Vec<Task>,
    on_submit: EventHandler<User>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = user.is_some();
    let initial = user.unwrap_or_default();
    let original_id = initial.id;
    let User {
        nome,
        email,
        senha,
        idade,
        tarefas,
        ..
    } = initial;
    let idade = if editing {
        idade.to_string()
    } else {
        String::new()
    };
    let tarefa = tarefas
        .and_then(|task| task.id)
        .map(|id| id.to_string())
        .unwrap_or_default();

    let mut nome = use_signal(move || nome);
    let mut email = use_signal(move || email);
    let mut senha = use_signal(move || senha);
    let mut idade = use_signal(move || idade);
    let mut tarefa_id = use_signal(move || tarefa);
    let mut error = use_signal(|| None::<String>);

    let tasks_for_submit = tasks.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let nome_value = nome().trim().to_string();
        let email_value = email().trim().to_string();
        let senha_value = senha();
        if nome_value.is_empty() || email_value.is_empty() || senha_value.is_empty() {
            error.set(Some("Preencha nome, email e senha.".to_string()));
            return;
        }

        let idade_value: u32 = match idade().trim().parse() {
            Ok(value) if (1..=120).contains(&value) => value,
            _ => {
                error.set(Some("Informe uma idade entre 1 e 120.".to_string()));
                return;
            }
        };

        let tarefa_value = tarefa_id()
            .parse::<i64>()
            .ok()
            .and_then(|id| tasks_for_submit.iter().find(|task| task.id == Some(id)))
            .cloned();

        error.set(None);
        on_submit.call(User {
            id: original_id,
            nome: nome_value,
            email: email_value,
            senha: senha_value,
            idade: idade_value,
            tarefas: tarefa_value,
        });
    };

    let title = if editing {
        "Editar Usuário"
    } else {
        "Novo Usuário"
    };
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
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Nome *" }
                        input {
                            r#type: "text",
                            placeholder: "Digite o nome completo",
                            value: "{nome}",
                            oninput: move |evt| nome.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Email *" }
                        input {
                            r#type: "email",
                            placeholder: "exemplo@email.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Senha *" }
                        input {
                            r#type: "password",
                            placeholder: "Digite a senha",
                            value: "{senha}",
                            oninput: move |evt| senha.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Idade *" }
                        input {
                            r#type: "number",
                            min: 1,
                            max: 120,
                            placeholder: "Digite a idade",
                            value: "{idade}",
                            oninput: move |evt| idade.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Tarefa Associada" }
                        select {
                            value: "{tarefa_id}",
                            onchange: move |evt| tarefa_id.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                            option { value: "", "Selecione uma tarefa (opcional)" }
                            for task in tasks.iter() {
                                option {
                                    key: "{task.id.unwrap_or_default()}",
                                    value: "{task.id.unwrap_or_default()}",
                                    "{task.nome} - {task.status}"
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
