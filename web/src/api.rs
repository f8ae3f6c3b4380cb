//! HTTP client for the registration backend.
//!
//! The backend exposes plain JSON CRUD endpoints for the two resources
//! (`/usuarios`, `/tarefas`). Calls either resolve or fail once; there is no
//! retry or timeout handling here.

use cadastro_core::{Task, User};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Backend base URL. Override at build time with `CADASTRO_API_URL`.
pub const DEFAULT_BASE_URL: &str = match option_env!("CADASTRO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Errors surfaced by the API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend could not be reached.
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Server { status: u16 },
    /// The response body was not the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Network(err)
        }
    }
}

/// Operations the view-state store needs from the backend.
///
/// `ApiClient` is the production implementation; store tests substitute the
/// generated mock.
#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn get_user(&self, id: i64) -> Result<User, ApiError>;
    async fn create_user(&self, user: User) -> Result<User, ApiError>;
    async fn update_user(&self, id: i64, user: User) -> Result<User, ApiError>;
    async fn delete_user(&self, id: i64) -> Result<(), ApiError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;
    async fn get_task(&self, id: i64) -> Result<Task, ApiError>;
    async fn create_task(&self, task: Task) -> Result<Task, ApiError>;
    async fn update_task(&self, id: i64, task: Task) -> Result<Task, ApiError>;
    async fn delete_task(&self, id: i64) -> Result<(), ApiError>;
}

/// Reqwest-backed client for the registration backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Server {
                status: status.as_u16(),
            })
        }
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(DEFAULT_BASE_URL)
    }
}

impl Backend for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/usuarios").await
    }

    async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/usuarios/{id}")).await
    }

    async fn create_user(&self, user: User) -> Result<User, ApiError> {
        self.post_json("/usuarios", &user).await
    }

    async fn update_user(&self, id: i64, user: User) -> Result<User, ApiError> {
        self.put_json(&format!("/usuarios/{id}"), &user).await
    }

    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/usuarios/{id}")).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/tarefas").await
    }

    async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        self.get_json(&format!("/tarefas/{id}")).await
    }

    async fn create_task(&self, task: Task) -> Result<Task, ApiError> {
        self.post_json("/tarefas", &task).await
    }

    async fn update_task(&self, id: i64, task: Task) -> Result<Task, ApiError> {
        self.put_json(&format!("/tarefas/{id}"), &task).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/tarefas/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_core::{TaskStatus, parse_timestamp};

    fn sample_task() -> Task {
        Task {
            id: None,
            nome: "Write report".to_string(),
            descricao: "Q3 summary".to_string(),
            status: TaskStatus::EmAndamento,
            data_criacao: parse_timestamp("2024-01-01T10:00").unwrap(),
            user: None,
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.url("/usuarios"), "http://localhost:8080/usuarios");
        assert_eq!(client.url("/tarefas/7"), "http://localhost:8080/tarefas/7");
    }

    #[test]
    fn create_payload_omits_missing_id() {
        let body = serde_json::to_value(sample_task()).unwrap();
        assert!(body.get("id").is_none());
    }

    #[test]
    fn task_wire_format_uses_backend_names() {
        let body = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(body["status"], "EM_ANDAMENTO");
        assert_eq!(body["dataCriacao"], "2024-01-01T10:00:00");
        assert_eq!(body["descricao"], "Q3 summary");
    }

    #[test]
    fn persisted_entities_keep_their_id_on_the_wire() {
        let user = User {
            id: Some(3),
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            senha: "segredo".to_string(),
            idade: 30,
            tarefas: None,
        };
        let body = serde_json::to_value(user).unwrap();
        assert_eq!(body["id"], 3);
    }

    #[test]
    fn decodes_backend_task_with_assigned_users() {
        let body = serde_json::json!({
            "id": 5,
            "nome": "Relatório",
            "descricao": "Resumo do trimestre",
            "status": "PENDENTE",
            "dataCriacao": "2024-02-10T08:30:00",
            "user": [
                {"id": 1, "nome": "Ana", "email": "ana@example.com", "senha": "x", "idade": 30}
            ]
        });

        let task: Task = serde_json::from_value(body).unwrap();
        assert_eq!(task.id, Some(5));
        assert_eq!(task.status, TaskStatus::Pendente);
        assert_eq!(task.assigned_users().len(), 1);
        assert_eq!(task.assigned_users()[0].id, Some(1));
    }

    #[test]
    fn decodes_user_without_task_reference() {
        let body = serde_json::json!({
            "id": 2,
            "nome": "Bruno",
            "email": "bruno@example.com",
            "senha": "x",
            "idade": 25
        });

        let user: User = serde_json::from_value(body).unwrap();
        assert!(user.tarefas.is_none());
    }
}
