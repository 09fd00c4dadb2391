//! Object-orientation abusers: incomplete or incorrect application of
//! object-oriented programming principles.

use crate::models::{Category, EntryDraft, Field};

/// The object-orientation abuser smells in curriculum order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        switch_statements(),
        temporary_field(),
        refused_bequest(),
        alternative_classes_with_different_interfaces(),
    ]
}

fn switch_statements() -> EntryDraft {
    EntryDraft::new("Switch Statements", Category::ObjectOrientedAbuser)
        .field(
            Field::SignsAndSymptoms,
            "You have a complex switch operator or sequence of if statements.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Relatively rare use of switch and case operators is one of the hallmarks of \
             object-oriented code. Often code for a single switch can be scattered in different \
             places in the program. When a new condition is added, you have to find all the switch \
             code and modify it.\n\
             As a rule of thumb, when you see switch you should think of polymorphism.",
        )
        .field(
            Field::Treatment,
            "- To isolate switch and put it in the right class, you may need Extract Method and \
             then Move Method.\n\
             - If a switch is based on type code, such as when the program’s runtime mode is \
             switched, use Replace Type Code with Subclasses or Replace Type Code with \
             State/Strategy.\n\
             - After specifying the inheritance structure, use Replace Conditional with \
             Polymorphism.\n\
             - If there aren’t too many conditions in the operator and they all call same method \
             with different parameters, polymorphism will be superfluous. If this case, you can \
             break that method into multiple smaller methods with Replace Parameter with Explicit \
             Methods and change the switch accordingly.\n\
             - If one of the conditional options is null, use Introduce Null Object.",
        )
        .field(Field::Payoff, "Improved code organization.")
        .field(
            Field::WhenToIgnore,
            "- When a switch operator performs simple actions, there’s no reason to make code \
             changes.\n\
             - Often switch operators are used by factory design patterns (Factory Method or \
             Abstract Factory) to select a created class.",
        )
}

fn temporary_field() -> EntryDraft {
    EntryDraft::new("Temporary Field", Category::ObjectOrientedAbuser)
        .field(
            Field::SignsAndSymptoms,
            "Temporary fields get their values (and thus are needed by objects) only under \
             certain circumstances. Outside of these circumstances, they’re empty.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Oftentimes, temporary fields are created for use in an algorithm that requires a \
             large amount of inputs. So instead of creating a large number of parameters in the \
             method, the programmer decides to create fields for this data in the class. These \
             fields are used only in the algorithm and go unused the rest of the time.\n\
             This kind of code is tough to understand. You expect to see data in object fields \
             but for some reason they’re almost always empty.",
        )
        .field(
            Field::Treatment,
            "- Temporary fields and all code operating on them can be put in a separate class via \
             Extract Class. In other words, you’re creating a method object, achieving the same \
             result as if you would perform Replace Method with Method Object.\n\
             - Introduce Null Object and integrate it in place of the conditional code which was \
             used to check the temporary field values for existence.",
        )
        .field(Field::Payoff, "Better code clarity and organization.")
}

fn refused_bequest() -> EntryDraft {
    EntryDraft::new("Refused Bequest", Category::ObjectOrientedAbuser)
        .field(
            Field::SignsAndSymptoms,
            "If a subclass uses only some of the methods and properties inherited from its \
             parents, the hierarchy is off-kilter. The unneeded methods may simply go unused or be \
             redefined and give off exceptions.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Someone was motivated to create inheritance between classes only by the desire to \
             reuse the code in a superclass. But the superclass and subclass are completely \
             different.",
        )
        .field(
            Field::Treatment,
            "- If inheritance makes no sense and the subclass really does have nothing in common \
             with the superclass, eliminate inheritance in favor of Replace Inheritance with \
             Delegation.\n\
             - If inheritance is appropriate, get rid of unneeded fields and methods in the \
             subclass. Extract all fields and methods needed by the subclass from the parent \
             class, put them in a new superclass, and set both classes to inherit from it \
             (Extract Superclass).",
        )
        .field(
            Field::Payoff,
            "Improves code clarity and organization. You will no longer have to wonder why the \
             Dog class is inherited from the Chair class (even though they both have 4 legs).",
        )
}

fn alternative_classes_with_different_interfaces() -> EntryDraft {
    EntryDraft::new(
        "Alternative Classes with Different Interfaces",
        Category::ObjectOrientedAbuser,
    )
    .field(
        Field::SignsAndSymptoms,
        "Two classes perform identical functions but have different method names.",
    )
    .field(
        Field::ReasonsForTheProblem,
        "The programmer who created one of the classes probably did’t know that a functionally \
         equivalent class already existed.",
    )
    .field(
        Field::Treatment,
        "Try to put the interface of classes in terms of a common denominator:\n\
         - Rename Methods to make them identical in all alternative classes.\n\
         - Move Method, Add Parameter and Parameterize Method to make the signature and \
         implementation of methods the same.\n\
         - If only part of the functionality of the classes is duplicated, try using Extract \
         Superclass. In this case, the existing classes will become subclasses.\n\
         - After you have determined which treatment method to use and implemented it, you may be \
         able to delete one of the classes.",
    )
    .field(
        Field::Payoff,
        "- You get rid of unnecessary duplicated code, making the resulting code less bulky.\n\
         - Code becomes more readable and understandable (you no longer have to guess the reason \
         for creation of a second class performing the exact same functions as the first one).",
    )
    .field(
        Field::WhenToIgnore,
        "Sometimes merging classes is impossible or so difficult as to be pointless. One example \
         is when the alternative classes are in different libraries that each have their own \
         version of the class.",
    )
}
