//! Registry models and request payloads

pub mod forms;
pub mod item;
pub mod user;

// Re-export for convenience
pub use forms::{Credentials, EntryForm, FindForm};
pub use item::{ItemSearch, LostItem, NewLostItem};
pub use user::User;
