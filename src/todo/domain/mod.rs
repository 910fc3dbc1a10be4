//! Domain model for todo records.
//!
//! The todo domain models record identity, sanitized and validated text
//! fields, and the versioning rules for partial updates, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod sanitize;
mod text;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use sanitize::sanitize_text;
pub use text::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, TodoDescription, TodoTitle};
pub use todo::{Todo, TodoChanges};
