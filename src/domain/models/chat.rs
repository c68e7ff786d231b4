use serde::{Deserialize, Serialize};

/// One entry of the chat history list, in the order the server returned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryItem {
    pub id: String,
    pub title: String,
}

impl ChatHistoryItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Turn raw prompt input into a replacement title.
///
/// Returns `None` when the prompt was dismissed or the text is blank.
pub fn normalize_title_input(input: Option<String>) -> Option<String> {
    let input = input?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
