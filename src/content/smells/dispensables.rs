//! Dispensables: pointless and unneeded code whose absence would make
//! the code cleaner, more efficient and easier to understand.

use crate::models::{Category, EntryDraft, Field};

/// The dispensable smells in curriculum order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        comments(),
        duplicate_code(),
        lazy_class(),
        data_class(),
        dead_code(),
        speculative_generality(),
    ]
}

fn comments() -> EntryDraft {
    EntryDraft::new("Comments", Category::Dispensable)
        .field(
            Field::SignsAndSymptoms,
            "A method is filled with explanatory comments.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Comments are usually created with the best of intentions, when the author realizes \
             that his or her code isn’t intuitive or obvious. In such cases, comments are like a \
             deodorant masking the smell of fishy code that could be improved.\n\
             The best comment is a good name for a method or class.\n\
             If you feel that a code fragment can’t be understood without comments, try to change \
             the code structure in a way that makes comments unnecessary.",
        )
        .field(
            Field::Treatment,
            "- If a comment is intended to explain a complex expression, the expression should be \
             split into understandable subexpressions using Extract Variable.\n\
             - If a comment explains a section of code, this section can be turned into a separate \
             method via Extract Method. The name of the new method can be taken from the comment \
             text itself, most likely.\n\
             - If a method has already been extracted, but comments are still necessary to explain \
             what the method does, give the method a self-explanatory name. Use Rename Method for \
             this.\n\
             - If you need to assert rules about a state that’s necessary for the system to work, \
             use Introduce Assertion.",
        )
        .field(Field::Payoff, "Code becomes more intuitive and obvious.")
        .field(
            Field::WhenToIgnore,
            "Comments can sometimes be useful:\n\
             - When explaining why something is being implemented in a particular way.\n\
             - When explaining complex algorithms (when all other methods for simplifying the \
             algorithm have been tried and come up short).",
        )
}

fn duplicate_code() -> EntryDraft {
    EntryDraft::new("Duplicate Code", Category::Dispensable)
        .field(
            Field::SignsAndSymptoms,
            "Two code fragments look almost identical.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Duplication usually occurs when multiple programmers are working on different parts \
             of the same program at the same time. Since they’re working on different tasks, they \
             may be unaware their colleague has already written similar code that could be \
             repurposed for their own needs.\n\
             There’s also more subtle duplication, when specific parts of code look different but \
             actually perform the same job. This kind of duplication can be hard to find and fix.\n\
             Sometimes duplication is purposeful. When rushing to meet deadlines and the existing \
             code is “almost right” for the job, novice programmers may not be able to resist the \
             temptation of copying and pasting the relevant code. And in some cases, the \
             programmer is simply too lazy to de-clutter.",
        )
        .field(
            Field::Treatment,
            "- If the same code is found in two or more methods in the same class: use Extract \
             Method and place calls for the new method in both places.\n\
             - If the same code is found in two subclasses of the same level:\n\
             -- Use Extract Method for both classes, followed by Pull Up Field for the fields used \
             in the method that you’re pulling up.\n\
             -- If the duplicate code is inside a constructor, use Pull Up Constructor Body.\n\
             -- If the duplicate code is similar but not completely identical, use Form Template \
             Method.\n\
             -- If two methods do the same thing but use different algorithms, select the best \
             algorithm and apply Substitute Algorithm.\n\
             - If duplicate code is found in two different classes:\n\
             -- If the classes aren’t part of a hierarchy, use Extract Superclass in order to \
             create a single superclass for these classes that maintains all the previous \
             functionality.\n\
             -- If it’s difficult or impossible to create a superclass, use Extract Class in one \
             class and use the new component in the other.\n\
             - If a large number of conditional expressions are present and perform the same code \
             (differing only in their conditions), merge these operators into a single condition \
             using Consolidate Conditional Expression and use Extract Method to place the \
             condition in a separate method with an easy-to-understand name.\n\
             - If the same code is performed in all branches of a conditional expression: place \
             the identical code outside of the condition tree by using Consolidate Duplicate \
             Conditional Fragments.",
        )
        .field(
            Field::Payoff,
            "- Merging duplicate code simplifies the structure of your code and makes it shorter.\n\
             - Simplification + shortness = code that’s easier to simplify and cheaper to support.",
        )
        .field(
            Field::WhenToIgnore,
            "In very rare cases, merging two identical fragments of code can make the code less \
             intuitive and obvious.",
        )
}

fn lazy_class() -> EntryDraft {
    EntryDraft::new("Lazy Class", Category::Dispensable)
        .field(
            Field::SignsAndSymptoms,
            "Understanding and maintaining classes always costs time and money. So if a class \
             does’t do enough to earn your attention, it should be deleted.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Perhaps a class was designed to be fully functional but after some of the \
             refactoring it has become ridiculously small.\n\
             Or perhaps it was designed to support future development work that never got done.",
        )
        .field(
            Field::Treatment,
            "- Components that are near-useless should be given the Inline Class treatment.\n\
             - For subclasses with few functions, try Collapse Hierarchy.",
        )
        .field(
            Field::Payoff,
            "- Reduced code size.\n\
             - Easier maintenance.",
        )
        .field(
            Field::WhenToIgnore,
            "Sometimes a Lazy Class is created in order to delineate intentions for future \
             development, In this case, try to maintain a balance between clarity and simplicity \
             in your code.",
        )
}

fn data_class() -> EntryDraft {
    EntryDraft::new("Data Class", Category::Dispensable)
        .field(
            Field::SignsAndSymptoms,
            "A data class refers to a class that contains only fields and crude methods for \
             accessing them (getters and setters). These are simply containers for data used by \
             other classes. These classes don’t contain any additional functionality and can’t \
             independently operate on the data that they own.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "It’s a normal thing when a newly created class contains only a few public fields (and \
             maybe even a handful of getters/setters). But the true power of objects is that they \
             can contain behavior types or operations on their data.",
        )
        .field(
            Field::Treatment,
            "- If a class contains public fields, use Encapsulate Field to hide them from direct \
             access and require that access be performed via getters and setters only.\n\
             - Use Encapsulate Collection for data stored in collections (such as arrays).\n\
             - Review the client code that uses the class. In it, you may find functionality that \
             would be better located in the data class itself. If this is the case, use Move \
             Method and Extract Method to migrate this functionality to the data class.\n\
             - After the class has been filled with well thought-out methods, you may want to get \
             rid of old methods for data access that give overly broad access to the class data. \
             For this, Remove Setting Method and Hide Method may be helpful.",
        )
        .field(
            Field::Payoff,
            "- Improves understanding and organization of code. Operations on particular data are \
             now gathered in a single place, instead of haphazardly throughout the code.\n\
             - Helps you to spot duplication of client code.",
        )
}

fn dead_code() -> EntryDraft {
    EntryDraft::new("Dead Code", Category::Dispensable)
        .field(
            Field::SignsAndSymptoms,
            "A variable, parameter, field, method or class is no longer used (usually because \
             it’s obsolete).",
        )
        .field(
            Field::ReasonsForTheProblem,
            "When requirements for the software have changed or corrections have been made, \
             nobody had time to clean up the old code.\n\
             Such code could also be found in complex conditionals, when one of the branches \
             becomes unreachable (due to error or other circumstances).",
        )
        .field(
            Field::Treatment,
            "The quickest way to find dead code is to use a good IDE.\n\
             - Delete unused code and unneeded files.\n\
             - In the case of an unnecessary class, Inline Class or Collapse Hierarchy can be \
             applied if a subclass or superclass is used.\n\
             - To remove unneeded parameters, use Remove Parameter.",
        )
        .field(
            Field::Payoff,
            "- Reduced code size.\n\
             - Simpler support.",
        )
}

fn speculative_generality() -> EntryDraft {
    EntryDraft::new("Speculative Generality", Category::Dispensable)
        .field(
            Field::SignsAndSymptoms,
            "There’s an unused class, method, field or parameter.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Sometimes code is created “just in case” to support anticipated future features that \
             never get implemented. As a result, code becomes hard to understand and support.",
        )
        .field(
            Field::Treatment,
            "- For removing unused abstract classes, try Collapse Hierarchy.\n\
             - Unnecessary delegation of functionality to another class can be eliminated via \
             Inline Class.\n\
             - Unused methods? Use Inline Method to get rid of them.\n\
             - Methods with unused parameters should be given a look with the help of Remove \
             Parameter.\n\
             - Unused fields can be simply deleted.",
        )
        .field(
            Field::Payoff,
            "- Slimmer code.\n\
             - Easier support.",
        )
        .field(
            Field::WhenToIgnore,
            "- If you’re working on a framework, it’s eminently reasonable to create \
             functionality not used in the framework itself, as long as the functionality is \
             needed by the frameworks’s users.\n\
             - Before deleting elements, make sure that they aren’t used in unit tests. This \
             happens if tests need a way to get certain internal information from a class or \
             perform special testing-related actions.",
        )
}
