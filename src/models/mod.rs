//! Domain models for the refactoring catalog.

mod category;
mod entry;
mod field;
mod kind;

pub use category::Category;
pub use entry::{Entry, EntryDraft};
pub use field::{Field, NO_COMMENTS, NO_DRAWBACKS};
pub use kind::EntryKind;
