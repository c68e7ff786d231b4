pub mod chat;
pub mod home;
pub mod sign_in;
pub mod workspace;

pub use chat::Chat;
pub use home::Home;
pub use sign_in::SignIn;
pub use workspace::{Documents, Pricing, Prompts};
