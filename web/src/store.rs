//! View-state for the application.
//!
//! `Store` holds the last-fetched collections and orchestrates the
//! mutate-then-refetch cycle against the backend. `AppStore` is the
//! signal-backed handle the component tree receives through context.

use cadastro_core::{Task, User};
use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError, Backend};

/// User-visible banner raised by store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Modal form state for one entity type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Editor<T> {
    #[default]
    Closed,
    Creating,
    Editing(T),
}

impl<T> Editor<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Editor::Editing(entity) => Some(entity),
            _ => None,
        }
    }
}

/// A delete intent waiting for the user's confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingDelete {
    User(i64),
    Task(i64),
}

/// Last-fetched collections plus the transient UI state around them.
///
/// There are no optimistic updates: every mutation is followed by a full
/// refetch, so the collections always mirror the backend's last response.
#[derive(Debug, Clone)]
pub struct Store<B> {
    api: B,
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub user_editor: Editor<User>,
    pub task_editor: Editor<Task>,
    pub pending_delete: Option<PendingDelete>,
}

impl<B: Backend> Store<B> {
    pub fn new(api: B) -> Self {
        Store {
            api,
            users: Vec::new(),
            tasks: Vec::new(),
            loading: false,
            notice: None,
            user_editor: Editor::Closed,
            task_editor: Editor::Closed,
            pending_delete: None,
        }
    }

    /// Replaces the user collection with the backend's current state.
    /// On failure the previous collection is kept and a notice is raised.
    pub async fn refresh_users(&mut self) {
        match self.api.list_users().await {
            Ok(users) => self.users = users,
            Err(err) => self.fail("Falha ao carregar usuários", err),
        }
    }

    /// Replaces the task collection with the backend's current state.
    pub async fn refresh_tasks(&mut self) {
        match self.api.list_tasks().await {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.fail("Falha ao carregar tarefas", err),
        }
    }

    pub async fn refresh_all(&mut self) {
        self.refresh_users().await;
        self.refresh_tasks().await;
    }

    /// Creates the user when it has no id, updates it otherwise, then
    /// refetches the collection. The editor closes only on success.
    pub async fn save_user(&mut self, user: User) {
        let result = match user.id {
            Some(id) => self.api.update_user(id, user).await,
            None => self.api.create_user(user).await,
        };
        match result {
            Ok(_) => {
                self.user_editor = Editor::Closed;
                self.notice = Some(Notice::Success("Usuário salvo.".to_string()));
                self.refresh_users().await;
            }
            Err(err) => self.fail("Falha ao salvar usuário", err),
        }
    }

    /// Task counterpart of [`Store::save_user`].
    pub async fn save_task(&mut self, task: Task) {
        let result = match task.id {
            Some(id) => self.api.update_task(id, task).await,
            None => self.api.create_task(task).await,
        };
        match result {
            Ok(_) => {
                self.task_editor = Editor::Closed;
                self.notice = Some(Notice::Success("Tarefa salva.".to_string()));
                self.refresh_tasks().await;
            }
            Err(err) => self.fail("Falha ao salvar tarefa", err),
        }
    }

    pub fn request_delete_user(&mut self, id: i64) {
        self.pending_delete = Some(PendingDelete::User(id));
    }

    pub fn request_delete_task(&mut self, id: i64) {
        self.pending_delete = Some(PendingDelete::Task(id));
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Runs the armed delete, if any. A declined confirmation clears the
    /// intent before this is reached, so no backend call is made.
    pub async fn confirm_delete(&mut self) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        match pending {
            PendingDelete::User(id) => match self.api.delete_user(id).await {
                Ok(()) => {
                    self.notice = Some(Notice::Success("Usuário excluído.".to_string()));
                    self.refresh_users().await;
                }
                Err(err) => self.fail("Falha ao excluir usuário", err),
            },
            PendingDelete::Task(id) => match self.api.delete_task(id).await {
                Ok(()) => {
                    self.notice = Some(Notice::Success("Tarefa excluída.".to_string()));
                    self.refresh_tasks().await;
                }
                Err(err) => self.fail("Falha ao excluir tarefa", err),
            },
        }
    }

    pub fn open_user_editor(&mut self, user: Option<User>) {
        self.user_editor = match user {
            Some(user) => Editor::Editing(user),
            None => Editor::Creating,
        };
    }

    pub fn close_user_editor(&mut self) {
        self.user_editor = Editor::Closed;
    }

    pub fn open_task_editor(&mut self, task: Option<Task>) {
        self.task_editor = match task {
            Some(task) => Editor::Editing(task),
            None => Editor::Creating,
        };
    }

    pub fn close_task_editor(&mut self) {
        self.task_editor = Editor::Closed;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn fail(&mut self, context: &str, err: ApiError) {
        tracing::error!("{context}: {err}");
        self.notice = Some(Notice::Error(format!("{context}: {err}")));
    }
}

/// Context handle for the application store.
///
/// Async operations snapshot the store, run against the backend, and write
/// the result back; the browser event loop serializes them.
#[derive(Clone, Copy)]
pub struct AppStore {
    inner: Signal<Store<ApiClient>>,
}

/// Builds the store and exposes it to the component tree. Called once from
/// the root component.
pub fn provide_store() -> AppStore {
    use_context_provider(|| AppStore {
        inner: Signal::new(Store::new(ApiClient::default())),
    })
}

/// The store provided by the root component.
pub fn use_store() -> AppStore {
    use_context::<AppStore>()
}

impl AppStore {
    pub fn users(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.inner.read().tasks.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.read().loading
    }

    pub fn notice(&self) -> Option<Notice> {
        self.inner.read().notice.clone()
    }

    pub fn user_editor(&self) -> Editor<User> {
        self.inner.read().user_editor.clone()
    }

    pub fn task_editor(&self) -> Editor<Task> {
        self.inner.read().task_editor.clone()
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.inner.read().pending_delete
    }

    pub async fn refresh_all(mut self) {
        self.inner.write().loading = true;
        let mut store = self.snapshot();
        store.refresh_all().await;
        store.loading = false;
        self.inner.set(store);
    }

    pub async fn save_user(mut self, user: User) {
        self.inner.write().loading = true;
        let mut store = self.snapshot();
        store.save_user(user).await;
        store.loading = false;
        self.inner.set(store);
    }

    pub async fn save_task(mut self, task: Task) {
        self.inner.write().loading = true;
        let mut store = self.snapshot();
        store.save_task(task).await;
        store.loading = false;
        self.inner.set(store);
    }

    pub async fn confirm_delete(mut self) {
        self.inner.write().loading = true;
        let mut store = self.snapshot();
        store.confirm_delete().await;
        store.loading = false;
        self.inner.set(store);
    }

    pub fn request_delete_user(mut self, id: i64) {
        self.inner.write().request_delete_user(id);
    }

    pub fn request_delete_task(mut self, id: i64) {
        self.inner.write().request_delete_task(id);
    }

    pub fn cancel_delete(mut self) {
        self.inner.write().cancel_delete();
    }

    pub fn open_user_editor(mut self, user: Option<User>) {
        self.inner.write().open_user_editor(user);
    }

    pub fn close_user_editor(mut self) {
        self.inner.write().close_user_editor();
    }

    pub fn open_task_editor(mut self, task: Option<Task>) {
        self.inner.write().open_task_editor(task);
    }

    pub fn close_task_editor(mut self) {
        self.inner.write().close_task_editor();
    }

    pub fn dismiss_notice(mut self) {
        self.inner.write().dismiss_notice();
    }

    fn snapshot(&self) -> Store<ApiClient> {
        self.inner.peek().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackend;
    use cadastro_core::{TaskStatus, parse_timestamp};
    use mockall::predicate::eq;

    fn user(id: Option<i64>) -> User {
        User {
            id,
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            senha: "segredo".to_string(),
            idade: 30,
            tarefas: None,
        }
    }

    fn task(id: Option<i64>) -> Task {
        Task {
            id,
            nome: "Relatório".to_string(),
            descricao: "Resumo do trimestre".to_string(),
            status: TaskStatus::Pendente,
            data_criacao: parse_timestamp("2024-01-01T10:00").unwrap(),
            user: None,
        }
    }

    #[tokio::test]
    async fn refresh_users_is_idempotent_for_identical_backend_state() {
        let mut api = MockBackend::new();
        api.expect_list_users()
            .times(2)
            .returning(|| Ok(vec![user(Some(1)), user(Some(2))]));

        let mut store = Store::new(api);
        store.refresh_users().await;
        let first = store.users.clone();
        store.refresh_users().await;

        assert_eq!(store.users, first);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_collection_and_raises_notice() {
        let mut api = MockBackend::new();
        let mut seq = mockall::Sequence::new();
        api.expect_list_tasks()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![task(Some(1))]));
        api.expect_list_tasks()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(ApiError::Server { status: 500 }));

        let mut store = Store::new(api);
        store.refresh_tasks().await;
        store.refresh_tasks().await;

        assert_eq!(store.tasks.len(), 1);
        assert!(matches!(store.notice, Some(Notice::Error(_))));
    }

    #[tokio::test]
    async fn saving_user_without_id_creates_then_refreshes() {
        let mut api = MockBackend::new();
        api.expect_create_user()
            .withf(|user| user.id.is_none())
            .times(1)
            .returning(|mut user| {
                user.id = Some(10);
                Ok(user)
            });
        api.expect_update_user().times(0);
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user(Some(10))]));

        let mut store = Store::new(api);
        store.open_user_editor(None);
        store.save_user(user(None)).await;

        assert_eq!(store.users.len(), 1);
        assert_eq!(store.users[0].id, Some(10));
        assert_eq!(store.user_editor, Editor::Closed);
        assert!(matches!(store.notice, Some(Notice::Success(_))));
    }

    #[tokio::test]
    async fn saving_user_with_id_updates_in_place() {
        let mut api = MockBackend::new();
        api.expect_update_user()
            .withf(|id, _| *id == 1)
            .times(1)
            .returning(|_, user| Ok(user));
        api.expect_create_user().times(0);
        api.expect_list_users()
            .times(1)
            .returning(|| Ok(vec![user(Some(1))]));

        let mut store = Store::new(api);
        store.save_user(user(Some(1))).await;

        assert_eq!(store.users.len(), 1);
    }

    #[tokio::test]
    async fn failed_save_leaves_editor_open() {
        let mut api = MockBackend::new();
        api.expect_create_task()
            .times(1)
            .returning(|_| Err(ApiError::Server { status: 500 }));
        api.expect_list_tasks().times(0);

        let mut store = Store::new(api);
        store.open_task_editor(None);
        store.save_task(task(None)).await;

        assert_eq!(store.task_editor, Editor::Creating);
        assert!(matches!(store.notice, Some(Notice::Error(_))));
    }

    #[tokio::test]
    async fn confirmed_delete_calls_backend_and_refreshes() {
        let mut api = MockBackend::new();
        api.expect_delete_task()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(()));
        api.expect_list_tasks().times(1).returning(|| Ok(Vec::new()));

        let mut store = Store::new(api);
        store.tasks = vec![task(Some(7))];
        store.request_delete_task(7);
        store.confirm_delete().await;

        assert!(store.tasks.is_empty());
        assert!(store.pending_delete.is_none());
    }

    #[tokio::test]
    async fn declined_confirmation_never_calls_backend() {
        let mut api = MockBackend::new();
        api.expect_delete_user().times(0);
        api.expect_delete_task().times(0);

        let mut store = Store::new(api);
        store.request_delete_user(1);
        store.cancel_delete();
        store.confirm_delete().await;

        assert!(store.notice.is_none());
    }

    #[tokio::test]
    async fn failed_delete_raises_notice_and_skips_refresh() {
        let mut api = MockBackend::new();
        api.expect_delete_user()
            .with(eq(3))
            .times(1)
            .returning(|_| Err(ApiError::Server { status: 503 }));
        api.expect_list_users().times(0);

        let mut store = Store::new(api);
        store.users = vec![user(Some(3))];
        store.request_delete_user(3);
        store.confirm_delete().await;

        assert_eq!(store.users.len(), 1);
        assert!(matches!(store.notice, Some(Notice::Error(_))));
    }
}
