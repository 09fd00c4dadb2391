//! Simplifying Method Calls: techniques that make method calls simpler
//! and easier to understand, which in turn simplifies the interfaces
//! between classes.

use crate::models::{Category, EntryDraft, Field};

pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        add_parameter(),
        hide_method(),
        introduce_parameter_object(),
        parameterize_method(),
        preserve_whole_object(),
        remove_parameter(),
        remove_setting_method(),
        rename_method(),
        replace_constructor_with_factory_method(),
        replace_error_code_with_exception(),
        replace_exception_with_test(),
        replace_parameter_with_explicit_methods(),
        replace_parameter_with_method_call(),
        separate_query_from_modifier(),
    ]
}

fn add_parameter() -> EntryDraft {
    EntryDraft::new("Add Parameter", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "A method does’t have enough data to perform certain actions.",
        )
        .field(
            Field::Solution,
            "Create a new parameter to pass the necessary data.",
        )
        .field(
            Field::WhyRefactor,
            "You need to make changes to a method and these changes require adding information \
             or data that was previously not available to the method.",
        )
        .field(
            Field::Benefits,
            "The choice here is between adding a new parameter and adding a new private field \
             that contains the data needed by the method. A parameter is preferable when you \
             need some occasional or frequently changing data for which there’s no point in \
             holding it in an object all of the time. In this case, the refactoring will pay \
             off. Otherwise, add a private field and fill it with the necessary data before \
             calling the method.",
        )
        .field(
            Field::Drawbacks,
            "- Adding a new parameter is always easier than removing it, which is why parameter \
             lists frequently balloon to grotesque sizes. This smell is known as the Long \
             Parameter List.\n\
             If you need to add a new parameter, sometimes this means that your class does’t \
             contain the necessary data or the existing parameters don’t contain the necessary \
             related data. In both cases, the best solution is to consider moving data to the \
             main class or to other classes whose objects are already accessible from inside \
             the method.",
        )
        .field(
            Field::HowToRefactor,
            "1. See whether the method is defined in a superclass or subclass. If the method is \
             present in them, you will need to repeat all the steps in these classes as well.\n\
             2. The following step is critical for keeping your program functional during the \
             refactoring process. Create a new method by copying the old one and add the \
             necessary parameter to it. Replace the code for the old method with a call to the \
             new method. You can plug in any value to the new parameter (such as null for \
             objects or a zero for numbers).\n\
             3. Find all references to the old method and replace them with references to the \
             new method.\n\
             4. Delete the old method. Deletion isn’t possible if the old method is part of the \
             public interface. If that’s the case, mark the old method as deprecated.",
        )
}

fn hide_method() -> EntryDraft {
    EntryDraft::new("Hide Method", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "A method isn’t used by other classes or is used only inside its own class \
             hierarchy.",
        )
        .field(Field::Solution, "Make the method private or protected.")
        .field(
            Field::WhyRefactor,
            "Quite often, the need to hide methods for getting and setting values is due to \
             development of a richer interface that provides additional behavior, especially if \
             you started with a class that added little beyond mere data encapsulation.\n\
             As new behavior is built into the class, you may find that public getter and \
             setter methods are no longer necessary and can be hidden. If you make getter or \
             setter methods private and apply direct access to variables, you can delete the \
             method.",
        )
        .field(
            Field::Benefits,
            "- Hiding methods makes it easier for your code to evolve. When you change a \
             private method, you only need to worry about how to not break the current class \
             since you know that the method can’t be used anywhere else.\n\
             - By making methods private, you underscore the importance of the public interface \
             of the class and of the methods that remain public.",
        )
        .field(
            Field::HowToRefactor,
            "1. Regularly try to find methods that can be made private. Static code analysis \
             and good unit test coverage can offer a big leg up.\n\
             2. Make each method as private as possible.",
        )
}

fn introduce_parameter_object() -> EntryDraft {
    EntryDraft::new("Introduce Parameter Object", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "Your methods contain a repeating group of parameters.",
        )
        .field(Field::Solution, "Replace these parameters with an object.")
        .field(
            Field::WhyRefactor,
            "Identical groups of parameters are often encountered in multiple methods. This \
             causes code duplication of both the parameters themselves and of related \
             operations. By consolidating parameters in a single class, you can also move the \
             methods for handling this data there as well, freeing the other methods from this \
             code.",
        )
        .field(
            Field::Benefits,
            "- More readable code. Instead of a hodgepodge of parameters, you see a single \
             object with a comprehensible name.\n\
             - Identical groups of parameters scattered here and there create their own kind of \
             code duplication: while identical code isn’t being called, identical groups of \
             parameters and arguments are constantly encountered.",
        )
        .field(
            Field::Drawbacks,
            "If you move only data to a new class and don’t plan to move any behaviors or \
             related operations there, this begins to smell of a Data Class.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a new class that will represent your group of parameters. Make the \
             class immutable.\n\
             2. In the method that you want to refactor, use Add Parameter, which is where your \
             parameter object will be passed. In all method calls, pass the object created from \
             old method parameters to this parameter.\n\
             3. Now start deleting old parameters from the method one by one, replacing them in \
             the code with fields of the parameter object. Test the program after each \
             parameter replacement.\n\
             4. When done, see whether there’s any point in moving a part of the method (or \
             sometimes even the whole method) to a parameter object class. If so, use Move \
             Method or Extract Method.",
        )
}

fn parameterize_method() -> EntryDraft {
    EntryDraft::new("Parameterize Method", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "Multiple methods perform similar actions that are different only in their internal \
             values, numbers or operations.",
        )
        .field(
            Field::Solution,
            "Combine these methods by using a parameter that will pass the necessary special \
             value.",
        )
        .field(
            Field::WhyRefactor,
            "If you have similar methods, you probably have duplicate code, with all the \
             consequences that this entails.\n\
             What’s more, if you need to add yet another version of this functionality, you \
             will have to create yet another method. Instead, you could simply run the existing \
             method with a different parameter.",
        )
        .field(
            Field::Drawbacks,
            "- Sometimes this refactoring technique can be taken too far, resulting in a long \
             and complicated common method instead of multiple simpler ones.\n\
             - Also be careful when moving activation/deactivation of functionality to a \
             parameter. This can eventually lead to creation of a large conditional operator \
             that will need to be treated via 'Replace Parameter with Explicit Methods'.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a new method with a parameter and move it to the code that’s the same \
             for all classes, by applying Extract Method. Note that sometimes only a certain \
             part of methods is actually the same. In this case, refactoring consists of \
             extracting only the same part to a new method.\n\
             2. In the code of the new method, replace the special/differing value with a \
             parameter.\n\
             3. For each old method, find the places where it’s called, replacing these calls \
             with calls to the new method that include a parameter. Then delete the old method.",
        )
}

fn preserve_whole_object() -> EntryDraft {
    EntryDraft::new("Preserve Whole Object", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            r#"You get several values from an object and then pass them as parameters to a method.
let low = days_temp_range.low();
let high = days_temp_range.high();
let within_plan = plan.within_range(low, high);"#,
        )
        .field(
            Field::Solution,
            r#"Instead, try passing the whole object.
let within_plan = plan.within_range(days_temp_range);"#,
        )
        .field(
            Field::WhyRefactor,
            "The problem is that each time before your method is called, the methods of the \
             future parameter object must be called. If these methods or the quantity of data \
             obtained for the method are changed, you will need to carefully find a dozen such \
             places in the program and implement these changes in each of them.\n\
             After you apply this refactoring technique, the code for getting all necessary \
             data will be stored in one place—the method itself.",
        )
        .field(
            Field::Benefits,
            "- Instead of a hodgepodge of parameters, you see a single object with a \
             comprehensible name.\n\
             - If the method needs more data from an object, you won’t need to rewrite all the \
             places where the method is used—merely inside the method itself.",
        )
        .field(
            Field::Drawbacks,
            "Sometimes this transformation causes a method to become less flexible: previously \
             the method could get data from many different sources but now, because of \
             refactoring, we’re limiting its use to only objects with a particular interface.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a parameter in the method for the object from which you can get the \
             necessary values.\n\
             2. Now start removing the old parameters from the method one by one, replacing \
             them with calls to the relevant methods of the parameter object. Test the program \
             after each replacement of a parameter.\n\
             3. Delete the getter code from the parameter object that had preceded the method \
             call.",
        )
}

fn remove_parameter() -> EntryDraft {
    EntryDraft::new("Remove Parameter", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "A parameter isn’t used in the body of a method.",
        )
        .field(Field::Solution, "Remove the unused parameter.")
        .field(
            Field::WhyRefactor,
            "Every parameter in a method call forces the programmer reading it to figure out \
             what information is found in this parameter. And if a parameter is entirely unused \
             in the method body, this “noggin scratching” is for naught.\n\
             And in any case, additional parameters are extra code that has to be run.\n\
             Sometimes we add parameters with an eye to the future, anticipating changes to the \
             method for which the parameter might be needed. All the same, experience shows \
             that it’s better to add a parameter only when it’s genuinely needed. After all, \
             anticipated changes often remain just that—anticipated.",
        )
        .field(
            Field::Benefits,
            "A method contains only the parameters that it truly requires.",
        )
        .field(
            Field::WhenNotToUse,
            "If the method is implemented in different ways in subclasses or in a superclass, \
             and your parameter is used in those implementations, leave the parameter as-is.",
        )
        .field(
            Field::HowToRefactor,
            "1. See whether the method is defined in a superclass or subclass. If so, is the \
             parameter used there? If the parameter is used in one of these implementations, \
             hold off on this refactoring technique.\n\
             2. The next step is important for keeping the program functional during the \
             refactoring process. Create a new method by copying the old one and delete the \
             relevant parameter from it. Replace the code of the old method with a call to the \
             new one.\n\
             3. Find all references to the old method and replace them with references to the \
             new method.\n\
             4. Delete the old method. Don’t perform this step if the old method is part of a \
             public interface. In this case, mark the old method as deprecated.",
        )
}

fn remove_setting_method() -> EntryDraft {
    EntryDraft::new("Remove Setting Method", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "The value of a field should be set only when it’s created, and not change at any \
             time after that.",
        )
        .field(
            Field::Solution,
            "So remove methods that set the field’s value.",
        )
        .field(
            Field::WhyRefactor,
            "You want to prevent any changes to the value of a field.",
        )
        .field(
            Field::HowToRefactor,
            "1. The value of a field should be changeable only in the constructor. If the \
             constructor does’t contain a parameter for setting the value, add one.\n\
             2. Find all setter calls.\n\
             - If a setter call is located right after a call for the constructor of the \
             current class, move its argument to the constructor call and remove the setter.\n\
             - Replace setter calls in the constructor with direct access to the field.\n\
             3. Delete the setter.",
        )
}

fn rename_method() -> EntryDraft {
    EntryDraft::new("Rename Method", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "The name of a method does’t explain what the method does.",
        )
        .field(Field::Solution, "Rename the method.")
        .field(
            Field::WhyRefactor,
            "Perhaps a method was poorly named from the very beginning—for example, someone \
             created the method in a rush and did’t give proper care to naming it well.\n\
             Or perhaps the method was well named at first but as its functionality grew, the \
             method name stopped being a good descriptor.",
        )
        .field(
            Field::Benefits,
            "Code readability. Try to give the new method a name that reflects what it does. \
             Something like create_order(), render_customer_info(), etc.",
        )
        .field(
            Field::HowToRefactor,
            "1. See whether the method is defined in a superclass or subclass. If so, you must \
             repeat all steps in these classes too.\n\
             2. The next method is important for maintaining the functionality of the program \
             during the refactoring process. Create a new method with a new name. Copy the code \
             of the old method to it. Delete all the code in the old method and, instead of it, \
             insert a call for the new method.\n\
             3. Find all references to the old method and replace them with references to the \
             new one.\n\
             4. Delete the old method. If the old method is part of a public interface, don’t \
             perform this step. Instead, mark the old method as deprecated.",
        )
}

fn replace_constructor_with_factory_method() -> EntryDraft {
    EntryDraft::new("Replace Constructor with Factory Method", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            r#"You have a complex constructor that does something more than just setting parameter values in object fields.
impl Employee {
    fn new(type_: i32) -> Self {
        Employee { type_ }
    }
    // ...
}"#,
        )
        .field(
            Field::Solution,
            r#"Create a factory method and use it to replace constructor calls.
impl Employee {
    fn create(type_: i32) -> Employee {
        let employee = Employee::new(type_);
        // Do some heavy lifting.
        employee
    }
    // ...
}"#,
        )
        .field(
            Field::WhyRefactor,
            "The most obvious reason for using this refactoring technique is related to Replace \
             Type Code with Subclasses.\n\
             You have code in which a object was previously created and the value of the coded \
             type was passed to it. After use of the refactoring method, several subclasses \
             have appeared and from them you need to create objects depending on the value of \
             the coded type. Changing the original constructor to make it return subclass \
             objects is impossible, so instead we create a static factory method that will \
             return objects of the necessary classes, after which it replaces all calls to the \
             original constructor.\n\
             Factory methods can be used in other situations as well, when constructors aren’t \
             up to the task. They can be important when attempting to Change Value to \
             Reference. They can also be used to set various creation modes that go beyond the \
             number and types of parameters.",
        )
        .field(
            Field::Benefits,
            "- A factory method does’t necessarily return an object of the class in which it \
             was called. Often these could be its subclasses, selected based on the arguments \
             given to the method.\n\
             - A factory method can have a better name that describes what and how it returns \
             what it does, for example Troops::get_crew(my_tank).\n\
             - A factory method can return an already created object, unlike a constructor, \
             which always creates a new instance.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a factory method. Place a call to the current constructor in it.\n\
             2. Replace all constructor calls with calls to the factory method.\n\
             3. Declare the constructor private.\n\
             4. Investigate the constructor code and try to isolate the code not directly \
             related to constructing an object of the current class, moving such code to the \
             factory method.",
        )
}

fn replace_error_code_with_exception() -> EntryDraft {
    EntryDraft::new("Replace Error Code with Exception", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            r#"A method returns a special value that indicates an error?
fn withdraw(&mut self, amount: i32) -> i32 {
    if amount > self.balance {
        -1
    } else {
        self.balance -= amount;
        0
    }
}"#,
        )
        .field(
            Field::Solution,
            r#"Throw an exception instead.
/// Errors with BalanceError when amount > balance.
fn withdraw(&mut self, amount: i32) -> Result<(), BalanceError> {
    if amount > self.balance {
        return Err(BalanceError);
    }
    self.balance -= amount;
    Ok(())
}"#,
        )
        .field(
            Field::WhyRefactor,
            "Returning error codes is an obsolete holdover from procedural programming. In \
             modern programming, error handling is performed by special classes, which are \
             named exceptions. If a problem occurs, you “throw” an error, which is then \
             “caught” by one of the exception handlers. Special error-handling code, which is \
             ignored in normal conditions, is activated to respond.",
        )
        .field(
            Field::Benefits,
            "- Frees code from a large number of conditionals for checking various error \
             codes. Exception handlers are a much more succinct way to differentiate normal \
             execution paths from abnormal ones.\n\
             - Exception classes can implement their own methods, thus containing part of the \
             error handling functionality (such as for sending error messages).\n\
             - Unlike exceptions, error codes can’t be used in a constructor, since a \
             constructor must return only a new object.",
        )
        .field(
            Field::Drawbacks,
            "An exception handler can turn into a goto-like crutch. Avoid this! Don’t use \
             exceptions to manage code execution. Exceptions should be thrown only to inform \
             of an error or critical situation.",
        )
        .field(
            Field::HowToRefactor,
            "Try to perform these refactoring steps for only one error code at a time. This \
             will make it easier to keep all the important information in your head and avoid \
             errors.\n\
             1. Find all calls to a method that returns error codes and, instead of checking \
             for an error code, wrap it in try/catch blocks.\n\
             2. Inside the method, instead of returning an error code, throw an exception.\n\
             3. Change the method signature so that it contains information about the \
             exception being thrown (@throws section).",
        )
}

fn replace_exception_with_test() -> EntryDraft {
    EntryDraft::new("Replace Exception with Test", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            r#"You throw an exception in a place where a simple test would do the job?
fn value_for_period(&self, period_number: usize) -> f64 {
    std::panic::catch_unwind(|| self.values[period_number]).unwrap_or(0.0)
}"#,
        )
        .field(
            Field::Solution,
            r#"Replace the exception with a condition test.
fn value_for_period(&self, period_number: usize) -> f64 {
    if period_number >= self.values.len() {
        return 0.0;
    }
    self.values[period_number]
}"#,
        )
        .field(
            Field::WhyRefactor,
            "Exceptions should be used to handle irregular behavior related to an unexpected \
             error. They shouldn’t serve as a replacement for testing. If an exception can be \
             avoided by simply verifying a condition before running, then do so. Exceptions \
             should be reserved for real errors.\n\
             For instance, you entered a minefield and triggered a mine there, resulting in an \
             exception; the exception was successfully handled and you were lifted through the \
             air to safety beyond the mine field. But you could have avoided this all by simply \
             reading the warning sign in front of the minefield to begin with.",
        )
        .field(
            Field::Benefits,
            "A simple conditional can sometimes be more obvious than exception handling code.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a conditional for an edge case and move it before the try/catch block.\n\
             2. Move code from the catch section inside this conditional.\n\
             3. In the catch section, place the code for throwing a usual unnamed exception \
             and run all the tests.\n\
             4. If no exceptions were thrown during the tests, get rid of the try/catch \
             operator.",
        )
}

fn replace_parameter_with_explicit_methods() -> EntryDraft {
    EntryDraft::new("Replace Parameter with Explicit Methods", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            r#"A method is split into parts, each of which is run depending on the value of a parameter.
fn set_value(&mut self, name: &str, value: i32) {
    if name == "height" {
        self.height = value;
        return;
    }
    if name == "width" {
        self.width = value;
        return;
    }
    unreachable!();
}"#,
        )
        .field(
            Field::Solution,
            r#"Extract the individual parts of the method into their own methods and call them instead of the original method.
fn set_height(&mut self, arg: i32) {
    self.height = arg;
}

fn set_width(&mut self, arg: i32) {
    self.width = arg;
}"#,
        )
        .field(
            Field::WhyRefactor,
            "A method containing parameter-dependent variants has grown massive. Non-trivial \
             code is run in each branch and new variants are added very rarely.",
        )
        .field(
            Field::Benefits,
            "Improves code readability. It’s much easier to understand the purpose of \
             start_engine() than set_value(\"engine_enabled\", true).",
        )
        .field(
            Field::WhenNotToUse,
            "Don’t replace a parameter with explicit methods if a method is rarely changed and \
             new variants aren’t added inside it.",
        )
        .field(
            Field::HowToRefactor,
            "1. For each variant of the method, create a separate method. Run these methods \
             based on the value of a parameter in the main method.\n\
             2. Find all places where the original method is called. In these places, place a \
             call for one of the new parameter-dependent variants.\n\
             3. When no calls to the original method remain, delete it.",
        )
}

fn replace_parameter_with_method_call() -> EntryDraft {
    EntryDraft::new("Replace Parameter with Method Call", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            r#"Calling a query method and passing its results as the parameters of another method, while that method could call the query directly.
let base_price = quantity * item_price;
let season_discount = self.seasonal_discount();
let fees = self.fees();
let final_price = discounted_price(base_price, season_discount, fees);"#,
        )
        .field(
            Field::Solution,
            r#"Instead of passing the value through a parameter, try placing a query call inside the method body.
let base_price = quantity * item_price;
let final_price = discounted_price(base_price);"#,
        )
        .field(
            Field::WhyRefactor,
            "A long list of parameters is hard to understand. In addition, calls to such \
             methods often resemble a series of cascades, with winding and exhilarating value \
             calculations that are hard to navigate yet have to be passed to the method. So if \
             a parameter value can be calculated with the help of a method, do this inside the \
             method itself and get rid of the parameter.",
        )
        .field(
            Field::Benefits,
            "We get rid of unneeded parameters and simplify method calls. Such parameters are \
             often created not for the project as it’s now, but with an eye for future needs \
             that may never come.",
        )
        .field(
            Field::Drawbacks,
            "You may need the parameter tomorrow for other needs... making you rewrite the \
             method.",
        )
        .field(
            Field::HowToRefactor,
            "1. Make sure that the value-getting code does’t use parameters from the current \
             method, since they’ll be unavailable from inside another method. If so, moving \
             the code isn’t possible.\n\
             2. If the relevant code is more complicated than a single method or function \
             call, use Extract Method to isolate this code in a new method and make the call \
             simple.\n\
             3. In the code of the main method, replace all references to the parameter being \
             replaced with calls to the method that gets the value.\n\
             4. Use Remove Parameter to eliminate the now-unused parameter.",
        )
}

fn separate_query_from_modifier() -> EntryDraft {
    EntryDraft::new("Separate Query from Modifier", Category::SimplifyingMethodCalls)
        .field(
            Field::Problem,
            "Do you have a method that returns a value but also changes something inside an \
             object?",
        )
        .field(
            Field::Solution,
            "Split the method into two separate methods. As you would expect, one of them \
             should return the value and the other one modifies the object.",
        )
        .field(
            Field::WhyRefactor,
            "This factoring technique implements Command and Query Responsibility Segregation. \
             This principle tells us to separate code responsible for getting data from code \
             that changes something inside an object.\n\
             Code for getting data is named a query. Code for changing things in the visible \
             state of an object is named a modifier. When a query and modifier are combined, \
             you don’t have a way to get data without making changes to its condition. In \
             other words, you ask a question and can change the answer even as it’s being \
             received. This problem becomes even more severe when the person calling the query \
             may not know about the method’s “side effects”, which often leads to runtime \
             errors.\n\
             But remember that side effects are dangerous only in the case of modifiers that \
             change the visible state of an object. These could be, for example, fields \
             accessible from an object’s public interface, entry in a database, in files, etc. \
             If a modifier only caches a complex operation and saves it within the private \
             field of a class, it can hardly cause any side effects.",
        )
        .field(
            Field::Benefits,
            "If you have a query that does’t change the state of your program, you can call it \
             as many times as you like without having to worry about unintended changes in the \
             result caused by the mere fact of you calling the method.",
        )
        .field(
            Field::Drawbacks,
            "In some cases it’s convenient to get data after performing a command. For \
             example, when deleting something from a database you want to know how many rows \
             were deleted.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a new query method to return what the original method did.\n\
             2. Change the original method so that it returns only the result of calling the \
             new query method.\n\
             3. Replace all references to the original method with a call to the query method. \
             Immediately before this line, place a call to the modifier method. This will save \
             you from side effects in case if the original method was used in a condition of a \
             conditional operator or loop.\n\
             4. Get rid of the value-returning code in the original method, which now has \
             become a proper modifier method.",
        )
}
