mod builtin;
mod loader;

pub use builtin::builtin_questions;
pub use loader::{LoadError, load_questions_from_json};
