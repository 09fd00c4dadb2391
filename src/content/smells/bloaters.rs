//! Bloaters: code, methods and classes that have increased to such
//! gargantuan proportions that they are hard to work with.

use crate::models::{Category, EntryDraft, Field};

/// The bloater smells in curriculum order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        long_method(),
        large_class(),
        primitive_obsession(),
        long_parameter_list(),
        data_clumps(),
    ]
}

fn long_method() -> EntryDraft {
    EntryDraft::new("Long Method", Category::Bloater)
        .field(
            Field::SignsAndSymptoms,
            "A method contains too many lines of code. Generally, any method longer than ten lines \
             should make you start asking questions.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Like the Hotel California, something is always being added to a method but nothing is \
             ever taken out. Since it’s easier to write code than to read it, this “smell” remains \
             unnoticed until the method turns into an ugly, oversized beast.\n\
             Mentally, it’s often harder to create a new method than to add to an existing one: \
             “But it’s just two lines, there’s no use in creating a whole method just for that...” \
             Which means that another line is added and then yet another, giving birth to a tangle \
             of spaghetti code.",
        )
        .field(
            Field::Treatment,
            "As a rule of thumb, if you feel the need to comment on something inside a method, you \
             should take this code and put it in a new method. Even a single line can and should be \
             split off into a separate method, if it requires explanations. And if the method has a \
             descriptive name, nobody will need to look at the code to see what it does.\n\
             - To reduce the length of a method body, use Extract Method.\n\
             - If local variables and parameters interfere with extracting a method, use Replace \
             Temp with Query, Introduce Parameter Object or Preserve Whole Object.\n\
             - If none of the previous recipes help, try moving the entire method to a separate \
             object via Replace Method with Method Object.\n\
             - Conditional operators and loops are a good clue that code can be moved to a separate \
             method. For conditionals, use Decompose Conditional. If loops are in the way, try \
             Extract Method.",
        )
        .field(
            Field::Payoff,
            "- Among all types of object-oriented code, classes with short methods live longest. \
             The longer a method or function is, the harder it becomes to understand and maintain \
             it.\n\
             - In addition, long methods offer the perfect hiding place for unwanted duplicate code.",
        )
        .field(
            Field::Performance,
            "Does an increase in the number of methods hurt performance, as many people claim? In \
             almost all cases the impact is so negligible that it’s not even worth worrying about.\n\
             Plus, now that you have clear and understandable code, you’re more likely to find truly \
             effective methods for restructuring code and getting real performance gains if the \
             need ever arises.",
        )
}

fn large_class() -> EntryDraft {
    EntryDraft::new("Large Class", Category::Bloater)
        .field(
            Field::SignsAndSymptoms,
            "A class contains many fields/methods/lines of code.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Classes usually start small. But over time, they get bloated as the program grows.\n\
             As is the case with long methods as well, programmers usually find it mentally less \
             taxing to place a new feature in an existing class than to create a new class for the \
             feature.",
        )
        .field(
            Field::Treatment,
            "When a class is wearing too many (functional) hats, think about splitting it up:\n\
             - Extract Class helps if part of the behavior of the large class can be spun off into \
             a separate component.\n\
             - Extract Subclass helps if part of the behavior of the large class can be implemented \
             in different ways or is used in rare cases.\n\
             - Extract Interface helps if it’s necessary to have a list of the operations and \
             behaviors that the client can use.\n\
             - If a large class is responsible for the graphical interface, you may try to move \
             some of its data and behavior to a separate domain object. In doing so, it may be \
             necessary to store copies of some data in two places and keep the data consistent. \
             Duplicate Observed Data offers a way to do this.",
        )
        .field(
            Field::Payoff,
            "- Refactoring of these classes spares developers from needing to remember a large \
             number of attributes for a class.\n\
             - In many cases, splitting large classes into parts avoids duplication of code and \
             functionality.",
        )
}

fn primitive_obsession() -> EntryDraft {
    EntryDraft::new("Primitive Obsession", Category::Bloater)
        .field(
            Field::SignsAndSymptoms,
            "- Use of primitives instead of small objects for simple tasks (such as currency, \
             ranges, special strings for phone numbers, etc.)\n\
             - Use of constants for coding information (such as a constant USER_ADMIN_ROLE = 1 for \
             referring to users with administrator rights.)\n\
             - Use of string constants as field names for use in data arrays.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Like most other smells, primitive obsessions are born in moments of weakness. “Just a \
             field for storing some data!” the programmer said. Creating a primitive field is so \
             much easier than making a whole new class, right? And so it was done. Then another \
             field was needed and added in the same way. Lo and behold, the class became huge and \
             unwieldy.\n\
             Primitives are often used to “simulate” types. So instead of a separate data type, you \
             have a set of numbers or strings that form the list of allowable values for some \
             entity. Easy-to-understand names are then given to these specific numbers and strings \
             via constants, which is why they’re spread wide and far.\n\
             Another example of poor primitive use is field simulation. The class contains a large \
             array of diverse data and string constants (which are specified in the class) are used \
             as array indices for getting this data.",
        )
        .field(
            Field::Treatment,
            "- If you have a large variety of primitive fields, it may be possible to logically \
             group some of them into their own class. Even better, move the behavior associated \
             with this data into the class too. For this task, try Replace Data Value with Object.\n\
             - If the values of primitive fields are used in method parameters, go with Introduce \
             Parameter Object or Preserve Whole Object.\n\
             - When complicated data is coded in variables, use Replace Type Code with Class, \
             Replace Type Code with Subclasses or Replace Type Code with State/Strategy.\n\
             - If there are arrays among the variables, use Replace Array with Object.",
        )
        .field(
            Field::Payoff,
            "- Code becomes more flexible thanks to use of objects instead of primitives.\n\
             - Better understandability and organization of code. Operations on particular data are \
             in the same place, instead of being scattered. No more guessing about the reason for \
             all these strange constants and why they’re in an array.\n\
             - Easier finding of duplicate code.",
        )
}

fn long_parameter_list() -> EntryDraft {
    EntryDraft::new("Long Parameter List", Category::Bloater)
        .field(
            Field::SignsAndSymptoms,
            "More than three or four parameters for a method.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "A long list of parameters might happen after several types of algorithms are merged in \
             a single method. A long list may have been created to control which algorithm will be \
             run and how.\n\
             Long parameter lists may also be the byproduct of efforts to make classes more \
             independent of each other. For example, the code for creating specific objects needed \
             in a method was moved from the method to the code for calling the method, but the \
             created objects are passed to the method as parameters. Thus the original class no \
             longer knows about the relationships between objects, and dependency has decreased. \
             But if several of these objects are created, each of them will require its own \
             parameter, which means a longer parameter list.\n\
             It’s hard to understand such lists, which become contradictory and hard to use as they \
             grow longer. Instead of a long list of parameters, a method can use the data of its \
             own object. If the current object does’t contain all necessary data, another object \
             (which will get the necessary data) can be passed as a method parameter.",
        )
        .field(
            Field::Treatment,
            "- Check what values are passed to parameters. If some of the arguments are just \
             results of method calls of another object, use Replace Parameter with Method Call. \
             This object can be placed in the field of its own class or passed as a method \
             parameter.\n\
             - Instead of passing a group of data received from another object as parameters, pass \
             the object itself to the method, by using Preserve Whole Object.\n\
             - But if these parameters are coming from different sources, you can pass them as a \
             single parameter object via Introduce Parameter Object.",
        )
        .field(
            Field::Payoff,
            "- More readable, shorter code.\n\
             - Refactoring may reveal previously unnoticed duplicate code.",
        )
        .field(
            Field::WhenToIgnore,
            "Don’t get rid of parameters if doing so would cause unwanted dependency between \
             classes.",
        )
}

fn data_clumps() -> EntryDraft {
    EntryDraft::new("Data Clumps", Category::Bloater)
        .field(
            Field::SignsAndSymptoms,
            "Sometimes different parts of the code contain identical groups of variables (such as \
             parameters for connecting to a database). These clumps should be turned into their own \
             classes.",
        )
        .field(
            Field::ReasonsForTheProblem,
            "Often these data groups are due to poor program structure or \"copy-pasta \
             programming”.\n\
             If you want to make sure whether or not some data is a data clump, just delete one of \
             the data values and see whether the other values still make sense. If this isn’t the \
             case, this is a good sign that this group of variables should be combined into an \
             object.",
        )
        .field(
            Field::Treatment,
            "- If repeating data comprises the fields of a class, use Extract Class to move the \
             fields to their own class.\n\
             - If the same data clumps are passed in the parameters of methods, use Introduce \
             Parameter Object to set them off as a class.\n\
             - If some of the data is passed to other methods, think about passing the entire data \
             object to the method instead of just individual fields. Preserve Whole Object will \
             help with this.\n\
             - Look at the code used by these fields. It may be a good idea to move this code to a \
             data class.",
        )
        .field(
            Field::Payoff,
            "- Improves understanding and organization of code. Operations on particular data are \
             now gathered in a single place, instead of haphazardly throughout the code.\n\
             - Reduces code size.",
        )
        .field(
            Field::WhenToIgnore,
            "Passing an entire object in the parameters of a method, instead of passing just its \
             values (primitive types), may create an undesirable dependency between the two \
             classes.",
        )
}
