//! Builtin refactoring technique definitions, one module per technique
//! group.

mod composing_methods;
mod dealing_with_generalization;
mod moving_features;
mod organizing_data;
mod simplifying_conditionals;
mod simplifying_method_calls;

use crate::models::EntryDraft;

/// All builtin techniques, group by group in canonical category order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    let mut drafts = Vec::new();
    drafts.extend(composing_methods::entries());
    drafts.extend(moving_features::entries());
    drafts.extend(organizing_data::entries());
    drafts.extend(simplifying_conditionals::entries());
    drafts.extend(simplifying_method_calls::entries());
    drafts.extend(dealing_with_generalization::entries());
    drafts
}
