//! Composing Methods: techniques that streamline methods, remove code
//! duplication, and pave the way for future improvements.
//!
//! Every entry in this group carries a before/after example snippet in
//! addition to its prose.

use crate::models::{Category, EntryDraft, Field};

/// The Composing Methods techniques in canonical order.
pub(crate) fn entries() -> Vec<EntryDraft> {
    vec![
        extract_method(),
        extract_variable(),
        inline_method(),
        inline_temp(),
        remove_assignments_to_parameters(),
        replace_method_with_method_object(),
        replace_temp_with_query(),
        split_temporary_variable(),
        substitute_algorithm(),
    ]
}

fn extract_method() -> EntryDraft {
    EntryDraft::new("Extract Method", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"You have a code fragment that can be grouped together.
fn print_owing(&self) {
    self.print_banner();

    // Print details.
    println!("name: {}", self.name);
    println!("amount: {}", self.outstanding());
}"#,
        )
        .field(
            Field::Solution,
            r#"Move this code to a separate new method (or function) and replace the old code with a call to the method.
fn print_owing(&self) {
    self.print_banner();
    self.print_details();
}

fn print_details(&self) {
    println!("name: {}", self.name);
    println!("amount: {}", self.outstanding());
}"#,
        )
        .field(
            Field::WhyRefactor,
            "The more lines found in a method, the harder it’s to figure out what the method \
             does. This is the main reason for this refactoring.\n\
             Besides eliminating rough edges in your code, extracting methods is also a step in \
             many other refactoring approaches.",
        )
        .field(
            Field::Benefits,
            "- More readable code! Be sure to give the new method a name that describes the \
             method’s purpose: create_order(), render_customer_info(), etc.\n\
             - Less code duplication. Often the code that’s found in a method can be reused in \
             other places in your program. So you can replace duplicates with calls to your new \
             method.\n\
             - Isolates independent parts of code, meaning that errors are less likely (such as \
             if the wrong variable is modified).",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a new method and name it in a way that makes its purpose self-evident.\n\
             2. Copy the relevant code fragment to your new method. Delete the fragment from its \
             old location and put a call for the new method there instead.\n\
             Find all variables used in this code fragment. If they’re declared inside the \
             fragment and not used outside of it, simply leave them unchanged—they’ll become \
             local variables for the new method.\n\
             3. If the variables are declared prior to the code that you’re extracting, you will \
             need to pass these variables to the parameters of your new method in order to use \
             the values previously contained in them. Sometimes it’s easier to get rid of these \
             variables by resorting to 'Replace Temp with Query'.\n\
             4. If you see that a local variable changes in your extracted code in some way, this \
             may mean that this changed value will be needed later in your main method. \
             Double-check! And if this is indeed the case, return the value of this variable to \
             the main method to keep everything functioning.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn print_owing(&self, name: &str) {
    self.print_banner();

    // Print details.
    println!("name: {name}");
    println!("amount: {}", self.outstanding());
}

After:

fn print_details(&self, name: &str) {
    println!("name: {name}");
    println!("amount: {}", self.outstanding());
}

fn print_owing(&self, name: &str) {
    self.print_banner();
    self.print_details(name);
}"#,
        )
}

fn extract_variable() -> EntryDraft {
    EntryDraft::new("Extract Variable", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"You have an expression that’s hard to understand.
fn render_banner(&self) {
    if self.platform.to_uppercase().contains("MAC")
        && self.browser.to_uppercase().contains("IE")
        && self.was_initialized()
        && self.resize > 0
    {
        // do something
    }
}"#,
        )
        .field(
            Field::Solution,
            r#"Place the result of the expression or its parts in separate variables that are self-explanatory.
fn render_banner(&self) {
    let is_mac_os = self.platform.to_uppercase().contains("MAC");
    let is_ie = self.browser.to_uppercase().contains("IE");
    let was_resized = self.resize > 0;

    if is_mac_os && is_ie && self.was_initialized() && was_resized {
        // do something
    }
}"#,
        )
        .field(
            Field::WhyRefactor,
            "The main reason for extracting variables is to make a complex expression more \
             understandable, by dividing it into its intermediate parts. These could be:\n\
             - Condition of the if() operator or a part of the ?: operator in C-based languages\n\
             - A long arithmetic expression without intermediate results\n\
             - Long multipart lines\n\
             Extracting a variable may be the first step towards performing Extract Method if you \
             see that the extracted expression is used in other places in your code.",
        )
        .field(
            Field::Benefits,
            "More readable code! Try to give the extracted variables good names that announce the \
             variable’s purpose loud and clear. More readability, fewer long-winded comments. Go \
             for names like customer_tax_value, city_unemployment_rate, client_salutation_string, \
             etc.",
        )
        .field(
            Field::Drawbacks,
            "- More variables are present in your code. But this is counterbalanced by the ease \
             of reading your code.\n\
             - When refactoring conditional expressions, remember that the compiler will most \
             likely optimize it to minimize the amount of calculations needed to establish the \
             resulting value. Say you have a following expression if (a() || b()) .... The \
             program won’t call the method b if the method a returns true because the resulting \
             value will still be true, no matter what value returns b.\n\
             However, if you extract parts of this expression into variables, both methods will \
             always be called, which might hurt performance of the program, especially if these \
             methods do some heavyweight work.",
        )
        .field(
            Field::GoodToKnow,
            "1. The main reason for extracting variables is to make a complex expression more \
             understandable, by dividing it into its intermediate parts.\n\
             2. More readable code!\n\
             3. More readability, fewer long-winded comments. when you want to explain what is \
             the purpose of the expression!!!\n\
             4. Applying this refactoring causes More variables present in your code.\n\
             5. This refactoring technique may cause performance impacts, Say you have a \
             following expression 'if (a() || b()) ....' The program won’t call the method 'b' if \
             the method 'a' returns true because the resulting value will still be true, no \
             matter what value returns 'b'. (Example provided in the technique implementation)",
        )
        .field(
            Field::HowToRefactor,
            "1. Insert a new line before the relevant expression and declare a new variable \
             there. Assign part of the complex expression to this variable.\n\
             2. Replace that part of the expression with the new variable.\n\
             3. Repeat the process for all complex parts of the expression.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn render_banner(&self, platform: &str, browser: &str, resize: i32) {
    if platform.to_uppercase().contains("MAC")
        && browser.to_uppercase().contains("IE")
        && self.was_initialized()
        && resize > 0
    {
        // do something
    }
}

After:

fn render_banner(&self, platform: &str, browser: &str, resize: i32) {
    let is_mac_os = platform.to_uppercase().contains("MAC");
    let is_ie = browser.to_uppercase().contains("IE");
    let was_resized = resize > 0;

    if is_mac_os && is_ie && self.was_initialized() && was_resized {
        // do something
    }
}

After, keeping short-circuit evaluation so the later checks only run
when the earlier ones pass:

fn render_banner(&self, platform: &str, browser: &str, resize: i32) {
    let is_mac_os = || platform.to_uppercase().contains("MAC");
    let is_ie = || browser.to_uppercase().contains("IE");
    let was_resized = || resize > 0;

    if is_mac_os() && is_ie() && self.was_initialized() && was_resized() {
        // do something
    }
}"#,
        )
}

fn inline_method() -> EntryDraft {
    EntryDraft::new("Inline Method", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"When a method body is more obvious than the method itself, use this technique.
impl PizzaDelivery {
    // ...
    fn rating(&self) -> u32 {
        if self.more_than_five_late_deliveries() { 2 } else { 1 }
    }

    fn more_than_five_late_deliveries(&self) -> bool {
        self.number_of_late_deliveries > 5
    }
}"#,
        )
        .field(
            Field::Solution,
            r#"Replace calls to the method with the method’s content and delete the method itself.
impl PizzaDelivery {
    // ...
    fn rating(&self) -> u32 {
        if self.number_of_late_deliveries > 5 { 2 } else { 1 }
    }
}"#,
        )
        .field(
            Field::WhyRefactor,
            "A method simply delegates to another method. In itself, this delegation is no \
             problem. But when there are many such methods, they become a confusing tangle that’s \
             hard to sort through.\n\
             Often methods aren’t too short originally, but become that way as changes are made \
             to the program. So don’t be shy about getting rid of methods that have outlived \
             their use.",
        )
        .field(
            Field::Benefits,
            "By minimizing the number of unneeded methods, you make the code more \
             straightforward.",
        )
        .field(
            Field::GoodToKnow,
            "1. When there are many methods that are simply delegates to another methods, they \
             become a confusing tangle that’s hard to sort through.\n\
             2. By minimizing the number of unneeded methods, you make the code more \
             straightforward.\n\
             3. Be aware of that: the method isn’t redefined in subclasses. If the method is \
             redefined, refrain from this technique.",
        )
        .field(
            Field::HowToRefactor,
            "1. Make sure that the method isn’t redefined in subclasses. If the method is \
             redefined, refrain from this technique.\n\
             2. Find all calls to the method. Replace these calls with the content of the method.\n\
             3. Delete the method.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn more_than_five_late_deliveries(&self) -> bool {
    self.number_of_late_deliveries > 5
}

fn rating(&self) -> u32 {
    if self.more_than_five_late_deliveries() { 2 } else { 1 }
}

After:

fn rating(&self) -> u32 {
    // More straightforward code, and one less method to chase.
    if self.number_of_late_deliveries > 5 { 2 } else { 1 }
}"#,
        )
}

fn inline_temp() -> EntryDraft {
    EntryDraft::new("Inline Temp", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"You have a temporary variable that’s assigned the result of a simple expression and nothing more.
fn has_discount(order: &Order) -> bool {
    let base_price = order.base_price();
    base_price > 1000.0
}"#,
        )
        .field(
            Field::Solution,
            r#"Replace the references to the variable with the expression itself.
fn has_discount(order: &Order) -> bool {
    order.base_price() > 1000.0
}"#,
        )
        .field(
            Field::WhyRefactor,
            "Inline local variables are almost always used as part of 'Replace Temp with Query' \
             or to pave the way for 'Extract Method'.",
        )
        .field(
            Field::Benefits,
            "This refactoring technique offers almost no benefit in and of itself. However, if \
             the variable is assigned the result of a method, you can marginally improve the \
             readability of the program by getting rid of the unnecessary variable.",
        )
        .field(
            Field::Drawbacks,
            "Sometimes seemingly useless temps are used to cache the result of an expensive \
             operation that’s reused several times. So before using this refactoring technique, \
             make sure that simplicity won’t come at the cost of performance.",
        )
        .field(
            Field::GoodToKnow,
            "1. You have a simple expression that the result held in a variable and nothing \
             more, please apply this refactoring to this useless variable then.\n\
             2. When a useless variable uses to cache an expensive operation result, you must \
             not apply this refactoring.",
        )
        .field(
            Field::HowToRefactor,
            "1. Find all places that use the variable. Instead of the variable, use the \
             expression that had been assigned to it.\n\
             2. Delete the declaration of the variable and its assignment line.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn has_discount(order: &Order) -> bool {
    let base_price = order.base_price();
    base_price > 1000.0
}

After:

fn has_discount(order: &Order) -> bool {
    order.base_price() > 1000.0
}

When the temp caches an expensive call, inlining it repeats the work
on every use. Keep the variable in cases like this:

fn calculate_discount(order: &Order) -> f64 {
    if order.base_price() < 1000.0 {
        100.0
    } else if order.base_price() < 2000.0 {
        order.base_price() * 10.0 / 100.0
    } else {
        order.base_price() * 25.0 / 100.0
    }
}"#,
        )
}

fn remove_assignments_to_parameters() -> EntryDraft {
    EntryDraft::new("Remove Assignments to Parameters", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"Some value is assigned to a parameter inside method’s body.
fn discount(mut input_val: i32, quantity: i32) -> i32 {
    if quantity > 50 {
        input_val -= 2;
    }
    // ...
    input_val
}"#,
        )
        .field(
            Field::Solution,
            r#"Use a local variable instead of a parameter.
fn discount(input_val: i32, quantity: i32) -> i32 {
    let mut result = input_val;

    if quantity > 50 {
        result -= 2;
    }
    // ...
    result
}"#,
        )
        .field(
            Field::WhyRefactor,
            "The reasons for this refactoring are the same as for 'Split Temporary Variable', but \
             in this case we’re dealing with a parameter, not a local variable.\n\
             First, if a parameter is passed via reference, then after the parameter value is \
             changed inside the method, this value is passed to the argument that requested \
             calling this method. Very often, this occurs accidentally and leads to unfortunate \
             effects. Even if parameters are usually passed by value (and not by reference) in \
             your programming language, this coding quirk may alienate those who are \
             unaccustomed to it.\n\
             Second, multiple assignments of different values to a single parameter make it \
             difficult for you to know what data should be contained in the parameter at any \
             particular point in time. The problem worsens if your parameter and its contents \
             are documented but the actual value is capable of differing from what’s expected \
             inside the method.",
        )
        .field(
            Field::Benefits,
            "- Each element of the program should be responsible for only one thing. This makes \
             code maintenance much easier going forward, since you can safely replace code \
             without any side effects.\n\
             - This refactoring helps to extract 'repetitive code to separate methods'.",
        )
        .field(
            Field::GoodToKnow,
            "1. Each component of the program code should be responsible for one and one thing \
             only. this makes it much easier to maintain the code\n\
             2. Code becomes more readable.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a local variable and assign the initial value of your parameter.\n\
             2. In all method code that follows this line, replace the parameter with your new \
             local variable.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn discount(mut input_val: i32, quantity: i32) -> i32 {
    // The original value of input_val is gone after this point.
    if quantity > 50 {
        input_val -= 2;
    }
    // ...
    input_val
}

After:

fn discount(input_val: i32, quantity: i32) -> i32 {
    let mut result = input_val;

    if quantity > 50 {
        result -= 2;
    }
    // ...
    result
}"#,
        )
}

fn replace_method_with_method_object() -> EntryDraft {
    EntryDraft::new("Replace Method with Method Object", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"You have a long method in which the local variables are so intertwined that you can’t apply Extract Method.
impl Order {
    // ...
    fn price(&self) -> f64 {
        let primary_base_price;
        let secondary_base_price;
        let tertiary_base_price;
        // Perform long computation.
    }
}"#,
        )
        .field(
            Field::Solution,
            r#"Transform the method into a separate class so that the local variables become fields of the class. Then you can split the method into several methods within the same class.
impl Order {
    // ...
    fn price(&self) -> f64 {
        PriceCalculator::new(self).compute()
    }
}

struct PriceCalculator {
    primary_base_price: f64,
    secondary_base_price: f64,
    tertiary_base_price: f64,
}

impl PriceCalculator {
    fn new(order: &Order) -> Self {
        // Copy relevant information from the order object.
    }

    fn compute(&self) -> f64 {
        // Perform long computation.
    }
}"#,
        )
        .field(
            Field::WhyRefactor,
            "A method is too long and you can’t separate it due to tangled masses of local \
             variables that are hard to isolate from each other.\n\
             The first step is to isolate the entire method into a separate class and turn its \
             local variables into fields of the class.\n\
             Firstly, this allows isolating the problem at the class level. Secondly, it paves \
             the way for splitting a large and unwieldy method into smaller ones that would’t \
             fit with the purpose of the original class anyway.",
        )
        .field(
            Field::Benefits,
            "Isolating a long method in its own class allows stopping a method from ballooning \
             in size. This also allows splitting it into sub-methods within the class, without \
             polluting the original class with utility methods.",
        )
        .field(
            Field::Drawbacks,
            "Another class is added, increasing the overall complexity of the program.",
        )
        .field(
            Field::GoodToKnow,
            "1. Isolating a long method in its own class allows stopping a method from \
             ballooning in size.This also allows splitting it into submethods within the class, \
             without polluting the original class with utility methods.",
        )
        .field(
            Field::HowToRefactor,
            "1. Create a new class. Name it based on the purpose of the method that you’re \
             refactoring.\n\
             2. In the new class, create a private field for storing a reference to an instance \
             of the class in which the method was previously located. It could be used to get \
             some required data from the original class if needed.\n\
             3. Create a separate private field for each local variable of the method.\n\
             4. Create a constructor that accepts as parameters the values of all local \
             variables of the method and also initializes the corresponding private fields.\n\
             5. Declare the main method and copy the code of the original method to it, \
             replacing the local variables with private fields.\n\
             6. Replace the body of the original method in the original class by creating a \
             method object and calling its main method.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

impl Order {
    // ...
    fn price(&self) -> f64 {
        let primary_base_price;
        let secondary_base_price;
        let tertiary_base_price;
        // Perform long computation.
    }
}

After:

impl Order {
    // ...
    fn price(&self) -> f64 {
        PriceCalculator::new(self).compute()
    }
}

struct PriceCalculator {
    primary_base_price: f64,
    secondary_base_price: f64,
    tertiary_base_price: f64,
}

impl PriceCalculator {
    fn new(order: &Order) -> Self {
        // Copy relevant information from the order object.
    }

    fn compute(&self) -> f64 {
        // Perform long computation.
    }
}"#,
        )
}

fn replace_temp_with_query() -> EntryDraft {
    EntryDraft::new("Replace Temp with Query", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"You place the result of an expression in a local variable for later use in your code.
fn calculate_total(&self) -> f64 {
    let base_price = self.quantity * self.item_price;

    if base_price > 1000.0 {
        base_price * 0.95
    } else {
        base_price * 0.98
    }
}"#,
        )
        .field(
            Field::Solution,
            r#"Move the entire expression to a separate method and return the result from it. Query the method instead of using a variable. Incorporate the new method in other methods, if necessary.
fn calculate_total(&self) -> f64 {
    if self.base_price() > 1000.0 {
        self.base_price() * 0.95
    } else {
        self.base_price() * 0.98
    }
}

fn base_price(&self) -> f64 {
    self.quantity * self.item_price
}"#,
        )
        .field(
            Field::WhyRefactor,
            "This refactoring can lay the groundwork for applying 'Extract Method' for a portion \
             of a very long method.\n\
             The same expression may sometimes be found in other methods as well, which is one \
             reason to consider creating a common method.",
        )
        .field(
            Field::Benefits,
            "- Code readability. It’s much easier to understand the purpose of the method tax() \
             than the line order_price() * 0.2.\n\
             - Slimmer code via deduplication, if the line being replaced is used in multiple \
             methods.",
        )
        .field(
            Field::GoodToKnow,
            "Performance: This refactoring may prompt the question of whether this approach is \
             liable to cause a performance hit. The honest answer is: yes, it is, since the \
             resulting code may be burdened by querying a new method. But with today’s fast CPUs \
             and excellent compilers, the burden will almost always be minimal. By contrast, \
             readable code and the ability to reuse this method in other places in program \
             code—thanks to this refactoring approach—are very noticeable benefits.\n\
             Nonetheless, if your temp variable is used to cache the result of a truly \
             time-consuming expression, you may want to stop this refactoring after extracting \
             the expression to a new method.",
        )
        .field(
            Field::HowToRefactor,
            "1. Make sure that a value is assigned to the variable once and only once within the \
             method. If not, use 'Split Temporary Variable' to ensure that the variable will be \
             used only to store the result of your expression.\n\
             2. Use 'Extract Method' to place the expression of interest in a new method. Make \
             sure that this method only returns a value and does’t change the state of the \
             object. If the method affects the visible state of the object, use 'Separate Query \
             from Modifier'.\n\
             3. Replace the variable with a query to your new method.",
        )
        .field(
            Field::ExampleCode,
            r#"Before, with the expression duplicated across methods:

fn calculate_total(&self) -> f64 {
    let base_price = self.quantity * self.item_price;

    if base_price > 1000.0 {
        return base_price * 0.95;
    }
    base_price * 0.98
}

fn calculate_discount(&self) -> f64 {
    let base_price = self.quantity * self.item_price;

    if base_price < 1000.0 {
        100.0
    } else if base_price < 2000.0 {
        base_price * 10.0 / 100.0
    } else {
        base_price * 25.0 / 100.0
    }
}

After, with the expression extracted into a common query:

fn base_price(&self) -> f64 {
    self.quantity * self.item_price
}

fn calculate_total(&self) -> f64 {
    let base_price = self.base_price();

    if base_price > 1000.0 {
        return base_price * 0.95;
    }
    base_price * 0.98
}

fn calculate_discount(&self) -> f64 {
    let base_price = self.base_price();

    if base_price < 1000.0 {
        100.0
    } else if base_price < 2000.0 {
        base_price * 10.0 / 100.0
    } else {
        base_price * 25.0 / 100.0
    }
}"#,
        )
}

fn split_temporary_variable() -> EntryDraft {
    EntryDraft::new("Split Temporary Variable", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"You have a local variable that’s used to store various intermediate values inside a method (except for cycle variables).
let mut temp = 2.0 * (height + width);
println!("{temp}");
temp = height * width;
println!("{temp}");"#,
        )
        .field(
            Field::Solution,
            r#"Use different variables for different values. Each variable should be responsible for only one particular thing.
let perimeter = 2.0 * (height + width);
println!("{perimeter}");
let area = height * width;
println!("{area}");"#,
        )
        .field(
            Field::WhyRefactor,
            "If you’re skimping on the number of variables inside a function and reusing them \
             for various unrelated purposes, you’re sure to encounter problems as soon as you \
             need to make changes to the code containing the variables. You will have to recheck \
             each case of variable use to make sure that the correct values are used.",
        )
        .field(
            Field::Benefits,
            "- Each component of the program code should be responsible for one and one thing \
             only. This makes it much easier to maintain the code, since you can easily replace \
             any particular thing without fear of unintended effects.\n\
             - Code becomes more readable. If a variable was created long ago in a rush, it \
             probably has a name that does’t explain anything: k, a2, value, etc. But you can \
             fix this situation by naming the new variables in an understandable, \
             self-explanatory way. Such names might resemble customer_tax_value, \
             city_unemployment_rate, client_salutation_string and the like.\n\
             - This refactoring technique is useful if you anticipate using 'Extract Method' \
             later.",
        )
        .field(
            Field::GoodToKnow,
            "1. Each component of the program code should be responsible for one and one thing \
             only. this makes it much easier to maintain the code\n\
             2. Code becomes more readable.",
        )
        .field(
            Field::HowToRefactor,
            "1. Find the first place in the code where the variable is given a value. Here you \
             should rename the variable with a name that corresponds to the value being \
             assigned.\n\
             2. Use the new name instead of the old one in places where this value of the \
             variable is used.\n\
             3. Repeat as needed for places where the variable is assigned a different value.",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn calculate(height: f64, width: f64) {
    let mut temp = 2.0 * (height + width);
    println!("{temp}");
    temp = height * width;
    println!("{temp}");
}

After:

fn calculate(height: f64, width: f64) {
    let perimeter = 2.0 * (height + width);
    println!("{perimeter}");
    let area = height * width;
    println!("{area}");
}"#,
        )
}

fn substitute_algorithm() -> EntryDraft {
    EntryDraft::new("Substitute Algorithm", Category::ComposingMethods)
        .field(
            Field::Problem,
            r#"So you want to replace an existing algorithm with a new one?
fn found_person(people: &[String]) -> String {
    for person in people {
        if person == "Don" {
            return "Don".to_string();
        }
        if person == "John" {
            return "John".to_string();
        }
        if person == "Kent" {
            return "Kent".to_string();
        }
    }
    String::new()
}"#,
        )
        .field(
            Field::Solution,
            r#"Replace the body of the method that implements the algorithm with a new algorithm.
fn found_person(people: &[String]) -> String {
    let candidates = ["Don", "John", "Kent"];

    for person in people {
        if candidates.contains(&person.as_str()) {
            return person.clone();
        }
    }
    String::new()
}"#,
        )
        .field(
            Field::WhyRefactor,
            "- Gradual refactoring isn’t the only method for improving a program. Sometimes a \
             method is so cluttered with issues that it’s easier to tear down the method and \
             start fresh. And perhaps you have found an algorithm that’s much simpler and more \
             efficient. If this is the case, you should simply replace the old algorithm with \
             the new one.\n\
             - As time goes on, your algorithm may be incorporated into a well-known library or \
             framework and you want to get rid of your independent implementation, in order to \
             simplify maintenance.\n\
             - The requirements for your program may change so heavily that your existing \
             algorithm can’t be salvaged for the task.",
        )
        .field(
            Field::HowToRefactor,
            "1. Make sure that you have simplified the existing algorithm as much as possible. \
             Move unimportant code to other methods using 'Extract Method'. The fewer moving \
             parts in your algorithm, the easier it’s to replace.\n\
             2. Create your new algorithm in a new method. Replace the old algorithm with the \
             new one and start testing the program.\n\
             3. If the results don’t match, return to the old implementation and compare the \
             results. Identify the causes of the discrepancy. While the cause is often an error \
             in the old algorithm, it’s more likely due to something not working in the new \
             one.\n\
             4. When all tests are successfully completed, delete the old algorithm for good!",
        )
        .field(
            Field::ExampleCode,
            r#"Before:

fn found_person(people: &[String]) -> String {
    for person in people {
        if person == "Don" {
            return "Don".to_string();
        }
        if person == "John" {
            return "John".to_string();
        }
        if person == "Kent" {
            return "Kent".to_string();
        }
    }
    String::new()
}

After:

fn found_person(people: &[String]) -> String {
    let candidates = ["Don", "John", "Kent"];

    for person in people {
        if candidates.contains(&person.as_str()) {
            return person.clone();
        }
    }
    String::new()
}"#,
        )
}
