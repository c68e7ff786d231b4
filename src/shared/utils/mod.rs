// Browser helpers
pub mod prompt;

pub use prompt::prompt_for_title;
