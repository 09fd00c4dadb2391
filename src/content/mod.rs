//! Builtin catalog content.
//!
//! Every entry ships as an [`EntryDraft`] so that the exact same
//! validation path runs for builtin and caller-registered entries
//! alike. Drafts are listed smells first, then techniques, with each
//! group in its canonical category order.

mod smells;
mod techniques;

use crate::models::EntryDraft;

pub(crate) fn builtin_entries() -> Vec<EntryDraft> {
    let mut drafts = smells::entries();
    drafts.extend(techniques::entries());
    drafts
}
