pub mod common;
pub mod credit_summary;
pub mod delete_chat_modal;
pub mod history_list;
pub mod profile_menu;
pub mod settings_modal;

pub use common::{EmptyState, ErrorMessage, LoadingRows, SectionHeader};
pub use credit_summary::CreditSummary;
pub use delete_chat_modal::DeleteChatModal;
pub use history_list::HistorySection;
pub use profile_menu::ProfileMenu;
pub use settings_modal::SettingsModal;
