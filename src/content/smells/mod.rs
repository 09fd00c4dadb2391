//! Builtin code smell definitions, one module per smell family.

mod bloaters;
mod change_preventers;
mod couplers;
mod dispensables;
mod object_oriented_abusers;

use crate::models::EntryDraft;

/// All builtin smells, family by family in canonical category order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    let mut drafts = Vec::new();
    drafts.extend(bloaters::entries());
    drafts.extend(change_preventers::entries());
    drafts.extend(couplers::entries());
    drafts.extend(dispensables::entries());
    drafts.extend(object_oriented_abusers::entries());
    drafts
}
