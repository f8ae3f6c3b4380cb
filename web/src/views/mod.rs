mod dashboard;
mod not_found;
mod tasks;
mod users;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use tasks::Tasks;
pub use users::Users;
