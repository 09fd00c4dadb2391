//! Couplers: smells that contribute to excessive coupling between
//! classes, or show what happens when coupling is replaced by
//! excessive delegation.

use crate::models::{Category, EntryDraft, Field};

/// The coupler smells in curriculum order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        feature_envy(),
        inappropriate_intimacy(),
        message_chains(),
        middle_man(),
        incomplete_library_class(),
    ]
}

fn feature_envy() -> EntryDraft {
    EntryDraft::new("Feature Envy", Category::Coupler)
        .field(
            Field::SignsAndSymptoms,
            "A method accesses the data of another object more than its own data.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "This smell may occur after fields are moved to a data class. If this is the case, you \
             may want to move the operations on data to this class as well.",
        )
        .field(
            Field::Treatment,
            "As a basic rule, if things change at the same time, you should keep them in the same \
             place. Usually data and functions that use this data are changed together (although \
             exceptions are possible).\n\
             - If a method clearly should be moved to another place, use Move Method.\n\
             - If only part of a method accesses the data of another object, use Extract Method to \
             move the part in question.\n\
             - If a method uses functions from several other classes, first determine which class \
             contains most of the data used. Then place the method in this class along with the \
             other data. Alternatively, use Extract Method to split the method into several parts \
             that can be placed in different places in different classes.",
        )
        .field(
            Field::Payoff,
            "- Less code duplication (if the data handling code is put in a central place).\n\
             - Better code organization (methods for handling data are next to the actual data).",
        )
        .field(
            Field::WhenToIgnore,
            "Sometimes behavior is purposefully kept separate from the class that holds the data. \
             The usual advantage of this is the ability to dynamically change the behavior (see \
             Strategy, Visitor and other patterns).",
        )
}

fn inappropriate_intimacy() -> EntryDraft {
    EntryDraft::new("Inappropriate Intimacy", Category::Coupler)
        .field(
            Field::SignsAndSymptoms,
            "One class uses the internal fields and methods of another class.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Keep a close eye on classes that spend too much time together. Good classes should \
             know as little about each other as possible. Such classes are easier to maintain and \
             reuse.",
        )
        .field(
            Field::Treatment,
            "- The simplest solution is to use Move Method and Move Field to move parts of one \
             class to the class in which those parts are used. But this works only if the first \
             class truly does’t need these parts.\n\
             - Another solution is to use Extract Class and Hide Delegate on the class to make the \
             code relations “official”.\n\
             - If the classes are mutually interdependent, you should use Change Bidirectional \
             Association to Unidirectional.\n\
             - If this “intimacy” is between a subclass and the superclass, consider Replace \
             Delegation with Inheritance.",
        )
        .field(
            Field::Payoff,
            "- Improves code organization.\n\
             Simplifies support and code reuse.",
        )
}

fn message_chains() -> EntryDraft {
    EntryDraft::new("Message Chains", Category::Coupler)
        .field(
            Field::SignsAndSymptoms,
            "In code you see a series of calls resembling $a->b()->c()->d()",
        )
        .field(
            Field::ReasonsForTheProblem,
            "A message chain occurs when a client requests another object, that object requests \
             yet another one, and so on. These chains mean that the client is dependent on \
             navigation along the class structure. Any changes in these relationships require \
             modifying the client.",
        )
        .field(
            Field::Treatment,
            "- To delete a message chain, use Hide Delegate.\n\
             - Sometimes it’s better to think of why the end object is being used. Perhaps it \
             would make sense to use Extract Method for this functionality and move it to the \
             beginning of the chain, by using Move Method.",
        )
        .field(
            Field::Payoff,
            "- Reduces dependencies between classes of a chain.\n\
             - Reduces the amount of bloated code.",
        )
        .field(
            Field::WhenToIgnore,
            "Overly aggressive delegate hiding can cause code in which it’s hard to see where the \
             functionality is actually occurring. Which is another way of saying, avoid the Middle \
             Man smell as well.",
        )
}

fn middle_man() -> EntryDraft {
    EntryDraft::new("Middle Man", Category::Coupler)
        .field(
            Field::SignsAndSymptoms,
            "If a class performs only one action, delegating work to another class, why does it \
             exist at all?",
        )
        .field(
            Field::ReasonsForTheProblem,
            "This smell can be the result of overzealous elimination of Message Chains.\n\
             In other cases, it can be the result of the useful work of a class being gradually \
             moved to other classes. The class remains as an empty shell that does’t do anything \
             other than delegate.",
        )
        .field(
            Field::Treatment,
            "If most of a method’s classes delegate to another class, Remove Middle Man is in \
             order.",
        )
        .field(Field::Payoff, "Less bulky code.")
        .field(
            Field::WhenToIgnore,
            "Don’t delete middle man that have been created for a reason:\n\
             - A middle man may have been added to avoid inter-class dependencies.\n\
             - Some design patterns create middle man on purpose (such as Proxy or Decorator).",
        )
}

fn incomplete_library_class() -> EntryDraft {
    EntryDraft::new("Incomplete Library Class", Category::Coupler)
        .field(
            Field::SignsAndSymptoms,
            "Sooner or later, libraries stop meeting user needs. The only solution to the \
             problem—changing the library—is often impossible since the library is read-only.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "The author of the library has’t provided the features you need or has refused to \
             implement them.",
        )
        .field(
            Field::Treatment,
            "- To introduce a few methods to a library class, use Introduce Foreign Method.\n\
             - For big changes in a class library, use Introduce Local Extension.",
        )
        .field(
            Field::Payoff,
            "Reduces code duplication (instead of creating your own library from scratch, you can \
             still piggy-back off an existing one).",
        )
        .field(
            Field::WhenToIgnore,
            "Extending a library can generate additional work if the changes to the library \
             involve changes in code.",
        )
}
