//! Core domain models and dashboard derivations for the Sistema de Cadastro client.
pub mod model;
pub mod stats;

pub use model::{
    DATETIME_LOCAL_FORMAT, DATETIME_WIRE_FORMAT, ParseStatusError, ParseTimestampError, Task,
    TaskStatus, User, parse_timestamp,
};
pub use stats::{TaskStats, recent_tasks, recent_users};
