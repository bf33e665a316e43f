mod catalog;
mod session;
mod walker;

pub use catalog::{find_category, JournalCategory, CATEGORIES};
pub use session::{JournalSession, EMOTION_TAGS};
pub use walker::PromptWalker;
