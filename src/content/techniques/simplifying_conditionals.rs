//! Simplifying Conditional Expressions: techniques for taming the
//! complexity that conditionals accumulate over time.

use crate::models::{Category, EntryDraft, Field};

pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        consolidate_conditional_expression(),
        consolidate_duplicate_conditional_fragments(),
        decompose_conditional(),
        introduce_assertion(),
        introduce_null_object(),
        remove_control_flag(),
        replace_conditional_with_polymorphism(),
        replace_nested_conditional_with_guard_clauses(),
    ]
}

fn consolidate_conditional_expression() -> EntryDraft {
    EntryDraft::new(
        "Consolidate Conditional Expression",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"You have multiple conditionals that lead to the same result or action.
fn disability_amount(&self) -> f64 {
    if self.seniority < 2 {
        return 0.0;
    }
    if self.months_disabled > 12 {
        return 0.0;
    }
    if self.is_part_time {
        return 0.0;
    }
    // Compute the disability amount.
    // ...
}"#,
    )
    .field(
        Field::Solution,
        r#"Consolidate all these conditionals in a single expression.
fn disability_amount(&self) -> f64 {
    if self.is_not_eligible_for_disability() {
        return 0.0;
    }
    // Compute the disability amount.
    // ...
}"#,
    )
    .field(
        Field::WhyRefactor,
        "Your code contains many alternating operators that perform identical actions. It isn’t \
         clear why the operators are split up.\n\
         The main purpose of consolidation is to extract the conditional to a separate method \
         for greater clarity.",
    )
    .field(
        Field::Benefits,
        "- Eliminates duplicate control flow code. Combining multiple conditionals that have \
         the same “destination” helps to show that you’re doing only one complicated check \
         leading to one action.\n\
         - By consolidating all operators, you can now isolate this complex expression in a new \
         method with a name that explains the conditional’s purpose.",
    )
    .field(
        Field::HowToRefactor,
        "Before refactoring, make sure that the conditionals don’t have any “side effects” or \
         otherwise modify something, instead of simply returning values. Side effects may be \
         hiding in the code executed inside the operator itself, such as when something is \
         added to a variable based on the results of a conditional.\n\
         1. Consolidate the conditionals in a single expression by using and and or. As a \
         general rule when consolidating:\n\
         - Nested conditionals are joined using and.\n\
         - Consecutive conditionals are joined with or.\n\
         2. Perform 'Extract Method' on the operator conditions and give the method a name that \
         reflects the expression’s purpose.",
    )
}

fn consolidate_duplicate_conditional_fragments() -> EntryDraft {
    EntryDraft::new(
        "Consolidate Duplicate Conditional Fragments",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"Identical code can be found in all branches of a conditional.
if self.is_special_deal() {
    total = price * 0.95;
    self.send();
} else {
    total = price * 0.98;
    self.send();
}"#,
    )
    .field(
        Field::Solution,
        r#"Move the code outside of the conditional.
if self.is_special_deal() {
    total = price * 0.95;
} else {
    total = price * 0.98;
}
self.send();"#,
    )
    .field(
        Field::WhyRefactor,
        "Duplicate code is found inside all branches of a conditional, often as the result of \
         evolution of the code within the conditional branches. Team development can be a \
         contributing factor to this.",
    )
    .field(Field::Benefits, "Code deduplication.")
    .field(
        Field::HowToRefactor,
        "1. If the duplicated code is at the beginning of the conditional branches, move the \
         code to a place before the conditional.\n\
         2. If the code is executed at the end of the branches, place it after the \
         conditional.\n\
         3. If the duplicate code is randomly situated inside the branches, first try to move \
         the code to the beginning or end of the branch, depending on whether it changes the \
         result of the subsequent code.\n\
         4. If appropriate and the duplicate code is longer than one line, try using 'Extract \
         Method'.",
    )
}

fn decompose_conditional() -> EntryDraft {
    EntryDraft::new(
        "Decompose Conditional",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"You have a complex conditional (if-then/else or switch).
if date < SUMMER_START || date > SUMMER_END {
    charge = quantity * winter_rate + winter_service_charge;
} else {
    charge = quantity * summer_rate;
}"#,
    )
    .field(
        Field::Solution,
        r#"Decompose the complicated parts of the conditional into separate methods: the condition, then and else.
if is_summer(date) {
    charge = summer_charge(quantity);
} else {
    charge = winter_charge(quantity);
}"#,
    )
    .field(
        Field::WhyRefactor,
        "The longer a piece of code is, the harder it’s to understand. Things become even more \
         hard to understand when the code is filled with conditions:\n\
         - While you’re busy figuring out what the code in the then block does, you forget what \
         the relevant condition was.\n\
         - While you’re busy parsing else, you forget what the code in then does.",
    )
    .field(
        Field::Benefits,
        "- By extracting conditional code to clearly named methods, you make life easier for \
         the person who’ll be maintaining the code later (such as you, two months from now!).\n\
         - This refactoring technique is also applicable for short expressions in conditions. \
         The string is_salary_day() is much prettier and more descriptive than code for \
         comparing dates.",
    )
    .field(
        Field::HowToRefactor,
        "1. Extract the conditional to a separate method via 'Extract Method'.\n\
         2. Repeat the process for the then and else blocks.",
    )
}

fn introduce_assertion() -> EntryDraft {
    EntryDraft::new(
        "Introduce Assertion",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"For a portion of code to work correctly, certain conditions or values must be true.
fn expense_limit(&self) -> f64 {
    // Should have either expense limit or
    // a primary project.
    if self.expense_limit != NULL_EXPENSE {
        self.expense_limit
    } else {
        self.primary_project.member_expense_limit()
    }
}"#,
    )
    .field(
        Field::Solution,
        r#"Replace these assumptions with specific assertion checks.
fn expense_limit(&self) -> f64 {
    assert!(self.expense_limit != NULL_EXPENSE || self.primary_project.is_some());

    if self.expense_limit != NULL_EXPENSE {
        self.expense_limit
    } else {
        self.primary_project.member_expense_limit()
    }
}"#,
    )
    .field(
        Field::WhyRefactor,
        "Say that a portion of code assumes something about, for example, the current condition \
         of an object or value of a parameter or local variable. Usually this assumption will \
         always hold true except in the event of an error.\n\
         Make these assumptions obvious by adding corresponding assertions. As with type \
         hinting in method parameters, these assertions can act as live documentation for your \
         code.\n\
         As a guideline to see where your code needs assertions, check for comments that \
         describe the conditions under which a particular method will work.",
    )
    .field(
        Field::Benefits,
        "If an assumption isn’t true and the code therefore gives the wrong result, it’s better \
         to stop execution before this causes fatal consequences and data corruption. This also \
         means that you neglected to write a necessary test when devising ways to perform \
         testing of the program.",
    )
    .field(
        Field::Drawbacks,
        "- Sometimes an exception is more appropriate than a simple assertion. You can select \
         the necessary class of the exception and let the remaining code handle it correctly.\n\
         - When is an exception better than a simple assertion? If the exception can be caused \
         by actions of the user or system and you can handle the exception. On the other hand, \
         ordinary unnamed and unhandled exceptions are basically equivalent to simple \
         assertions—you don’t handle them and they’re caused exclusively as the result of a \
         program bug that never should have occurred.",
    )
    .field(
        Field::HowToRefactor,
        "When you see that a condition is assumed, add an assertion for this condition in order \
         to make sure.\n\
         Adding the assertion shouldn’t change the program’s behavior.\n\
         Don’t overdo it with use of assertions for everything in your code. Check for only the \
         conditions that are necessary for correct functioning of the code. If your code is \
         working normally even when a particular assertion is false, you can safely remove the \
         assertion.",
    )
}

fn introduce_null_object() -> EntryDraft {
    EntryDraft::new(
        "Introduce Null Object",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"Since some methods return null instead of real objects, you have many checks for null in your code.
let plan = if customer.is_none() {
    BillingPlan::basic()
} else {
    customer.plan()
};"#,
    )
    .field(
        Field::Solution,
        r#"Instead of null, return a null object that exhibits the default behavior.
struct NullCustomer;

impl Customer for NullCustomer {
    fn is_null(&self) -> bool {
        true
    }

    fn plan(&self) -> Plan {
        NullPlan::new()
    }
    // Some other NULL functionality.
}

// Replace null values with Null-object.
let customer = order.customer.unwrap_or_else(|| NullCustomer::new());

// Use Null-object as if it's normal subclass.
let plan = customer.plan();"#,
    )
    .field(
        Field::WhyRefactor,
        "Dozens of checks for null make your code longer and uglier.",
    )
    .field(
        Field::Drawbacks,
        "The price of getting rid of conditionals is creating yet another new class.",
    )
    .field(
        Field::HowToRefactor,
        "1. From the class in question, create a subclass that will perform the role of null \
         object.\n\
         2. In both classes, create the method is_null(), which will return true for a null \
         object and false for a real class.\n\
         3. Find all places where the code may return null instead of a real object. Change \
         the code so that it returns a null object.\n\
         4. Find all places where the variables of the real class are compared with null. \
         Replace these checks with a call for is_null().\n\
         5. If methods of the original class are run in these conditionals when a value does’t \
         equal null, redefine these methods in the null class and insert the code from the else \
         part of the condition there. Then you can delete the entire conditional and differing \
         behavior will be implemented via polymorphism.\n\
         If things aren’t so simple and the methods can’t be redefined, see if you can simply \
         extract the operators that were supposed to be performed in the case of a null value \
         to new methods of the null object. Call these methods instead of the old code in else \
         as the operations by default.",
    )
}

fn remove_control_flag() -> EntryDraft {
    EntryDraft::new(
        "Remove Control Flag",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        "You have a boolean variable that acts as a control flag for multiple boolean \
         expressions.",
    )
    .field(
        Field::Solution,
        "Instead of the variable, use break, continue and return.",
    )
    .field(
        Field::WhyRefactor,
        "Control flags date back to the days of yore, when “proper” programmers always had one \
         entry point for their functions (the function declaration line) and one exit point (at \
         the very end of the function).\n\
         In modern programming languages this style tic is obsolete, since we have special \
         operators for modifying the control flow in loops and other complex constructions:\n\
         - break: stops loop\n\
         - continue: stops execution of the current loop branch and goes to check the loop \
         conditions in the next iteration\n\
         - return: stops execution of the entire function and returns its result if given in \
         the operator",
    )
    .field(
        Field::Benefits,
        "Control flag code is often much more ponderous than code written with control flow \
         operators.",
    )
    .field(
        Field::HowToRefactor,
        "1. Find the value assignment to the control flag that causes the exit from the loop or \
         current iteration.\n\
         2. Replace it with break, if this is an exit from a loop; continue, if this is an exit \
         from an iteration, or return, if you need to return this value from the function.\n\
         3. Remove the remaining code and checks associated with the control flag.",
    )
}

fn replace_conditional_with_polymorphism() -> EntryDraft {
    EntryDraft::new(
        "Replace Conditional with Polymorphism",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"You have a conditional that performs various actions depending on object type or properties.
impl Bird {
    // ...
    fn speed(&self) -> f64 {
        match self.kind {
            EUROPEAN => self.base_speed(),
            AFRICAN => self.base_speed() - self.load_factor() * self.number_of_coconuts,
            NORWEGIAN_BLUE => {
                if self.is_nailed { 0.0 } else { self.base_speed_for(self.voltage) }
            }
            _ => unreachable!("Should be unreachable"),
        }
    }
}"#,
    )
    .field(
        Field::Solution,
        r#"Create subclasses matching the branches of the conditional. In them, create a shared method and move code from the corresponding branch of the conditional to it. Then replace the conditional with the relevant method call. The result is that the proper implementation will be attained via polymorphism depending on the object class.
trait Bird {
    // ...
    fn speed(&self) -> f64;
}

struct European;
impl Bird for European {
    fn speed(&self) -> f64 {
        self.base_speed()
    }
}

struct African;
impl Bird for African {
    fn speed(&self) -> f64 {
        self.base_speed() - self.load_factor() * self.number_of_coconuts
    }
}

struct NorwegianBlue;
impl Bird for NorwegianBlue {
    fn speed(&self) -> f64 {
        if self.is_nailed { 0.0 } else { self.base_speed_for(self.voltage) }
    }
}

// Somewhere in client code
let speed = bird.speed();"#,
    )
    .field(
        Field::WhyRefactor,
        "This refactoring technique can help if your code contains operators performing various \
         tasks that vary based on:\n\
         - Class of the object or interface that it implements\n\
         - Value of an object’s field\n\
         - Result of calling one of an object’s methods\n\
         If a new object property or type appears, you will need to search for and add code in \
         all similar conditionals. Thus the benefit of this technique is multiplied if there \
         are multiple conditionals scattered throughout all of an object’s methods.",
    )
    .field(
        Field::Benefits,
        "- This technique adheres to the Tell-Don’t-Ask principle: instead of asking an object \
         about its state and then performing actions based on this, it’s much easier to simply \
         tell the object what it needs to do and let it decide for itself how to do that.\n\
         - Removes duplicate code. You get rid of many almost identical conditionals.\n\
         - If you need to add a new execution variant, all you need to do is add a new subclass \
         without touching the existing code (Open/Closed Principle).",
    )
    .field(
        Field::HowToRefactor,
        "Preparing to Refactor\n\
         For this refactoring technique, you should have a ready hierarchy of classes that will \
         contain alternative behaviors. If you don’t have a hierarchy like this, create one. \
         Other techniques will help to make this happen:\n\
         - 'Replace Type Code with Subclasses'. Subclasses will be created for all values of a \
         particular object property. This approach is simple but less flexible since you can’t \
         create subclasses for the other properties of the object.\n\
         - 'Replace Type Code with State/Strategy'. A class will be dedicated for a particular \
         object property and subclasses will be created from it for each value of the property. \
         The current class will contain references to the objects of this type and delegate \
         execution to them.\n\
         The following steps assume that you have already created the hierarchy.\n\
         Refactoring Steps\n\
         1. If the conditional is in a method that performs other actions as well, perform \
         'Extract Method'.\n\
         2. For each hierarchy subclass, redefine the method that contains the conditional and \
         copy the code of the corresponding conditional branch to that location.\n\
         3. Delete this branch from the conditional.\n\
         4. Repeat replacement until the conditional is empty. Then delete the conditional and \
         declare the method abstract.",
    )
}

fn replace_nested_conditional_with_guard_clauses() -> EntryDraft {
    EntryDraft::new(
        "Replace Nested Conditional with Guard Clauses",
        Category::SimplifyingConditionalExpressions,
    )
    .field(
        Field::Problem,
        r#"You have a group of nested conditionals and it’s hard to determine the normal flow of code execution.
fn pay_amount(&self) -> f64 {
    let result;

    if self.is_dead {
        result = self.dead_amount();
    } else {
        if self.is_separated {
            result = self.separated_amount();
        } else {
            if self.is_retired {
                result = self.retired_amount();
            } else {
                result = self.normal_pay_amount();
            }
        }
    }

    result
}"#,
    )
    .field(
        Field::Solution,
        r#"Isolate all special checks and edge cases into separate clauses and place them before the main checks. Ideally, you should have a “flat” list of conditionals, one after the other.
fn pay_amount(&self) -> f64 {
    if self.is_dead {
        return self.dead_amount();
    }
    if self.is_separated {
        return self.separated_amount();
    }
    if self.is_retired {
        return self.retired_amount();
    }
    self.normal_pay_amount()
}"#,
    )
    .field(
        Field::WhyRefactor,
        r#"Spotting the “conditional from hell” is fairly easy. The indentations of each level of nestedness form an arrow, pointing to the right in the direction of pain and woe:
if () {
    if () {
        do {
            if () {
                if () {
                    if () {
                        ...
                    }
                }
                ...
            }
            ...
        }
        while ();
        ...
    }
    else {
        ...
    }
}
It’s difficult to figure out what each conditional does and how, since the “normal” flow of code execution isn’t immediately obvious. These conditionals indicate halter-skelter evolution, with each condition added as a stopgap measure without any thought paid to optimizing the overall structure.
To simplify the situation, isolate the special cases into separate conditions that immediately end execution and return a null value if the guard clauses are true. In effect, your mission here is to make the structure flat."#,
    )
    .field(
        Field::HowToRefactor,
        "Try to rid the code of side effects—'Separate Query from Modifier' may be helpful for \
         the purpose. This solution will be necessary for the reshuffling described below.\n\
         1. Isolate all guard clauses that lead to calling an exception or immediate return of \
         a value from the method. Place these conditions at the beginning of the method.\n\
         2. After rearrangement is complete and all tests are successfully completed, see \
         whether you can use 'Consolidate Conditional Expression' for guard clauses that lead \
         to the same exceptions or returned values.",
    )
}
