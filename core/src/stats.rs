//! Dashboard derivations over the in-memory collections.
//!
//! Pure functions, recomputed on every render. The collections are small
//! (CRUD demo data), so there is no caching or invalidation.

use crate::model::{Task, TaskStatus, User};

/// Task counts broken down by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub pendente: usize,
    pub em_andamento: usize,
    pub finalizado: usize,
}

impl TaskStats {
    /// Counts the given tasks by status.
    ///
    /// Invariant: `pendente + em_andamento + finalizado == total`.
    pub fn of(tasks: &[Task]) -> Self {
        let mut stats = TaskStats {
            total: tasks.len(),
            ..TaskStats::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::Pendente => stats.pendente += 1,
                TaskStatus::EmAndamento => stats.em_andamento += 1,
                TaskStatus::Finalizado => stats.finalizado += 1,
            }
        }
        stats
    }
}

/// The `limit` most recently created tasks, newest first.
///
/// Ordering is stable, so tasks sharing a timestamp keep their backend order.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.data_criacao.cmp(&a.data_criacao));
    sorted.truncate(limit);
    sorted
}

/// The `limit` most recently added users, by backend id descending.
///
/// Users without an id (not yet persisted) sort last.
pub fn recent_users(users: &[User], limit: usize) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_timestamp;

    fn task(id: i64, status: TaskStatus, created: &str) -> Task {
        Task {
            id: Some(id),
            nome: format!("Tarefa {id}"),
            descricao: String::new(),
            status,
            data_criacao: parse_timestamp(created).unwrap(),
            user: None,
        }
    }

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

    #[test]
    fn counts_sum_to_total() {
        let tasks = vec![
            task(1, TaskStatus::Pendente, "2024-01-01T08:00"),
            task(2, TaskStatus::Pendente, "2024-01-02T08:00"),
            task(3, TaskStatus::EmAndamento, "2024-01-03T08:00"),
            task(4, TaskStatus::Finalizado, "2024-01-04T08:00"),
        ];

        let stats = TaskStats::of(&tasks);

        assert_eq!(stats.pendente, 2);
        assert_eq!(stats.em_andamento, 1);
        assert_eq!(stats.finalizado, 1);
        assert_eq!(
            stats.pendente + stats.em_andamento + stats.finalizado,
            stats.total
        );
    }

    #[test]
    fn stats_of_empty_collection_are_zeroed() {
        assert_eq!(TaskStats::of(&[]), TaskStats::default());
    }

    #[test]
    fn recent_tasks_returns_five_latest_descending() {
        let tasks: Vec<Task> = (1..=7)
            .map(|day| {
                task(
                    day,
                    TaskStatus::Pendente,
                    &format!("2024-01-{day:02}T10:00"),
                )
            })
            .collect();

        let recent = recent_tasks(&tasks, 5);

        let ids: Vec<i64> = recent.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn recent_tasks_with_fewer_than_limit_returns_all() {
        let tasks = vec![
            task(1, TaskStatus::Pendente, "2024-01-01T10:00"),
            task(2, TaskStatus::Pendente, "2024-01-02T10:00"),
        ];

        assert_eq!(recent_tasks(&tasks, 5).len(), 2);
    }

    #[test]
    fn recent_tasks_is_stable_for_equal_timestamps() {
        let tasks = vec![
            task(1, TaskStatus::Pendente, "2024-01-01T10:00"),
            task(2, TaskStatus::Pendente, "2024-01-01T10:00"),
        ];

        let ids: Vec<i64> = recent_tasks(&tasks, 5).iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn recent_users_orders_by_id_descending() {
        let users = vec![user(Some(1)), user(Some(3)), user(Some(2))];

        let ids: Vec<Option<i64>> = recent_users(&users, 5).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn recent_users_puts_unpersisted_users_last() {
        let users = vec![user(None), user(Some(2)), user(Some(1))];

        let ids: Vec<Option<i64>> = recent_users(&users, 2).iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![Some(2), Some(1)]);
    }
}
