pub mod chat_message;
pub mod journal_entry;
pub mod mood_entry;
pub mod quote;
pub mod user;
