use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A registered user as exchanged with the backend.
///
/// `id` is assigned by the backend; a user built on the client before
/// creation carries `None` and the field is omitted from request bodies.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<i64>,
    pub nome: String,
    pub email: String,
    /// Opaque; the backend does not necessarily echo it back.
    #[cfg_attr(feature = "serde", serde(default))]
    pub senha: String,
    pub idade: u32,
    /// The one task this user is assigned to, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tarefas: Option<Task>,
}

impl User {
    /// Whether the backend has assigned this user an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A task as exchanged with the backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<i64>,
    pub nome: String,
    pub descricao: String,
    pub status: TaskStatus,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "dataCriacao", with = "timestamp")
    )]
    pub data_criacao: NaiveDateTime,
    /// Users assigned to this task. The inverse side of `User::tarefas`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub user: Option<Vec<User>>,
}

impl Task {
    /// Whether the backend has assigned this task an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Users assigned to this task, empty when the backend sent none.
    pub fn assigned_users(&self) -> &[User] {
        self.user.as_deref().unwrap_or_default()
    }
}

/// Lifecycle state of a task, transmitted as the backend's literal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TaskStatus {
    #[default]
    Pendente,
    EmAndamento,
    Finalizado,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pendente,
        TaskStatus::EmAndamento,
        TaskStatus::Finalizado,
    ];

    /// The literal string used on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            TaskStatus::Pendente => "PENDENTE",
            TaskStatus::EmAndamento => "EM_ANDAMENTO",
            TaskStatus::Finalizado => "FINALIZADO",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pendente => "Pendente",
            TaskStatus::EmAndamento => "Em Andamento",
            TaskStatus::Finalizado => "Finalizado",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(TaskStatus::Pendente),
            "EM_ANDAMENTO" => Ok(TaskStatus::EmAndamento),
            "FINALIZADO" => Ok(TaskStatus::Finalizado),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Format produced by `datetime-local` form inputs (minute precision).
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format written to the wire; the backend's `LocalDateTime` accepts it.
pub const DATETIME_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_READ_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    DATETIME_WIRE_FORMAT,
    DATETIME_LOCAL_FORMAT,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp: {0}")]
pub struct ParseTimestampError(pub String);

/// Parses a backend or form timestamp, accepting fractional-second, whole-second
/// and minute-precision forms.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ParseTimestampError> {
    DATETIME_READ_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| ParseTimestampError(raw.to_string()))
}

/// Serde codec for the backend's timezone-naive `dataCriacao` field.
#[cfg(feature = "serde")]
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::{DATETIME_WIRE_FORMAT, parse_timestamp};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(DATETIME_WIRE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(status.wire_name().parse::<TaskStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "CONCLUIDO".parse::<TaskStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("CONCLUIDO".to_string()));
    }

    #[test]
    fn default_status_is_pendente() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pendente);
    }

    #[test]
    fn status_labels_are_human_readable() {
        assert_eq!(TaskStatus::EmAndamento.to_string(), "Em Andamento");
    }

    #[test]
    fn parses_minute_precision_timestamps() {
        let parsed = parse_timestamp("2024-01-01T10:00").unwrap();
        assert_eq!(parsed.format(DATETIME_WIRE_FORMAT).to_string(), "2024-01-01T10:00:00");
    }

    #[test]
    fn parses_second_and_fractional_timestamps() {
        assert!(parse_timestamp("2024-01-01T10:00:30").is_ok());
        assert!(parse_timestamp("2024-01-01T10:00:30.123").is_ok());
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(parse_timestamp("01/01/2024 10:00").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn unpersisted_entities_have_no_id() {
        let user = User {
            nome: "Ana".to_string(),
            ..User::default()
        };
        assert!(!user.is_persisted());
    }

    #[test]
    fn assigned_users_defaults_to_empty() {
        let task = Task {
            id: Some(1),
            nome: "Relatório".to_string(),
            descricao: "Resumo do trimestre".to_string(),
            status: TaskStatus::Pendente,
            data_criacao: parse_timestamp("2024-01-01T10:00").unwrap(),
            user: None,
        };
        assert!(task.assigned_users().is_empty());
    }
}
