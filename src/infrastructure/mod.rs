// Server-side collaborators behind the server functions
pub mod demo_store;

pub use demo_store::{DemoStore, init_store, store};
