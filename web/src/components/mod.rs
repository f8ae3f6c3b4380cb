mod delete_confirm_button;
mod header;
mod loading_spinner;
mod notice_banner;
mod task_form;
mod user_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use notice_banner::NoticeBanner;
pub use task_form::TaskForm;
pub use user_form::UserForm;
