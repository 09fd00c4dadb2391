//! Change preventers: smells that mean changing one place forces you
//! to change many other places at the same time.

use crate::models::{Category, EntryDraft, Field};

/// The change preventer smells in curriculum order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        divergent_change(),
        shotgun_surgery(),
        parallel_inheritance_hierarchies(),
    ]
}

fn divergent_change() -> EntryDraft {
    EntryDraft::new("Divergent Change", Category::ChangePreventer)
        .field(
            Field::SignsAndSymptoms,
            "You find yourself having to change many unrelated methods when you make changes to a \
             class. For example, when adding a new product type you have to change the methods for \
             finding, displaying, and ordering products.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Often these divergent modifications are due to poor program structure or \"copy-pasta \
             programming”.",
        )
        .field(
            Field::Treatment,
            "- Split up the behavior of the class via Extract Class.\n\
             - If different classes have the same behavior, you may want to combine the classes \
             through inheritance (Extract Superclass and Extract Subclass).",
        )
        .field(
            Field::Payoff,
            "- Improves code organization.\n\
             - Reduces code duplication.\n\
             - Simplifies support.",
        )
}

fn shotgun_surgery() -> EntryDraft {
    EntryDraft::new("Shotgun Surgery", Category::ChangePreventer)
        .field(
            Field::SignsAndSymptoms,
            "Making any modifications requires that you make many small changes to many different \
             classes.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "A single responsibility has been split up among a large number of classes. This can \
             happen after overzealous application of Divergent Change.",
        )
        .field(
            Field::Treatment,
            "- Use Move Method and Move Field to move existing class behaviors into a single \
             class. If there’s no class appropriate for this, create a new one.\n\
             - If moving code to the same class leaves the original classes almost empty, try to \
             get rid of these now-redundant classes via Inline Class.",
        )
        .field(
            Field::Payoff,
            "- Better organization.\n\
             - Less code duplication.\n\
             - Easier maintenance.",
        )
}

fn parallel_inheritance_hierarchies() -> EntryDraft {
    EntryDraft::new("Parallel Inheritance Hierarchies", Category::ChangePreventer)
        .field(
            Field::SignsAndSymptoms,
            "Whenever you create a subclass for a class, you find yourself needing to create a \
             subclass for another class.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "All was well as long as the hierarchy stayed small. But with new classes being added, \
             making changes has become harder and harder.",
        )
        .field(
            Field::Treatment,
            "You may de-duplicate parallel class hierarchies in two steps. First, make instances \
             of one hierarchy refer to instances of another hierarchy. Then, remove the hierarchy \
             in the referred class, by using Move Method and Move Field.",
        )
        .field(
            Field::Payoff,
            "- Reduces code duplication.\n\
             - Can improve organization of code.",
        )
        .field(
            Field::WhenToIgnore,
            "Sometimes having parallel class hierarchies is just a way to avoid even bigger mess \
             with program architecture. If you find that your attempts to de-duplicate hierarchies \
             produce even uglier code, just step out, revert all of your changes and get used to \
             that code.",
        )
}
